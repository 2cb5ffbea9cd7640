use crate::highlight::{highlight_active_links, NavLink, NAV_LINK_SELECTOR};
use crate::log;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlAreaElement, HtmlLinkElement};

/// The DOM reports a missing address as an empty string.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Elements whose `href` property is a resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HrefSource {
    Anchor,
    Area,
    Link,
}

/// XHTML documents report lower-case tag names. SVG `<a>` also maps to
/// `Anchor` here but fails the `HtmlAnchorElement` cast.
fn href_source(tag_name: &str) -> Option<HrefSource> {
    match tag_name.to_ascii_uppercase().as_str() {
        "A" => Some(HrefSource::Anchor),
        "AREA" => Some(HrefSource::Area),
        "LINK" => Some(HrefSource::Link),
        _ => None,
    }
}

/// Only hyperlink elements have a resolved `href`. Anything else carrying
/// the nav class is a candidate that can never match.
impl NavLink for Element {
    fn resolved_href(&self) -> Option<String> {
        let href = match href_source(&self.tag_name())? {
            HrefSource::Anchor => self.dyn_ref::<HtmlAnchorElement>()?.href(),
            HrefSource::Area => self.dyn_ref::<HtmlAreaElement>()?.href(),
            HrefSource::Link => self.dyn_ref::<HtmlLinkElement>()?.href(),
        };
        non_empty(href)
    }

    fn add_class(&self, token: &str) {
        if self.class_list().add_1(token).is_err() {
            log::warn(&format!(
                "could not add class \"{}\" to <{}>",
                token,
                self.tag_name().to_lowercase()
            ));
        }
    }
}

/// Full address of the loaded page, if there is one.
pub fn current_address() -> Option<String> {
    web_sys::window()?.location().href().ok().and_then(non_empty)
}

/// All nav link candidates in document order.
pub fn candidates(document: &Document) -> Vec<Element> {
    let nodes = match document.query_selector_all(NAV_LINK_SELECTOR) {
        Ok(nodes) => nodes,
        Err(_) => {
            log::warn(&format!("selector {} was rejected", NAV_LINK_SELECTOR));
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Run one highlighting pass over the live document.
///
/// Returns the number of links marked active, or 0 outside a browser.
pub fn highlight_document() -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };

    let links = candidates(&document);
    let current = current_address();
    let matched = highlight_active_links(current.as_deref(), &links);

    log::debug(&format!(
        "{} of {} nav links marked active",
        matched,
        links.len()
    ));
    matched
}
