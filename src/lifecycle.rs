//! Scheduling the highlighting pass against the document lifecycle.

use crate::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";

/// What to do with the pass given `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyAction {
    /// The element tree is queryable already.
    RunNow,
    /// Still parsing; wait for `DOMContentLoaded`.
    WaitForContentLoaded,
}

/// `true` while the parser is still building the element tree.
///
/// Once the state is `interactive` or `complete` the `DOMContentLoaded`
/// event has already fired and a listener added now would never run.
pub fn should_defer(state: &str) -> bool {
    state == "loading"
}

pub fn ready_action(state: &str) -> ReadyAction {
    if should_defer(state) {
        ReadyAction::WaitForContentLoaded
    } else {
        ReadyAction::RunNow
    }
}

/// Run `callback` once the element tree can be queried.
///
/// Does nothing outside a browser.
pub fn on_document_ready<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if ready_action(&document.ready_state()) == ReadyAction::RunNow {
        callback();
        return;
    }

    let closure = Closure::once(Box::new(callback) as Box<dyn FnOnce()>);
    if document
        .add_event_listener_with_callback(DOM_CONTENT_LOADED, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn("could not listen for DOMContentLoaded, nav links stay unmarked");
        return;
    }
    // Fires once per page load; the listener lives as long as the page
    closure.forget();
}
