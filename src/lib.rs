pub mod dom;
pub mod highlight;
pub mod lifecycle;
mod log;

pub use highlight::{highlight_active_links, is_current, NavLink, ACTIVE_CLASS, NAV_LINK_SELECTOR};

use wasm_bindgen::prelude::*;

/// Re-run the pass by hand, e.g. after a script injected more nav links.
///
/// Returns the number of links marked active.
#[wasm_bindgen(js_name = highlightActiveLink)]
pub fn highlight_active_link() -> usize {
    dom::highlight_document()
}

/// Mark the current page's nav link once the document is ready
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    lifecycle::on_document_ready(|| {
        dom::highlight_document();
    });
}
