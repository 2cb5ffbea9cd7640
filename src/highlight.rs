//! Active navigation link marking.
//!
//! The pass is written against the [`NavLink`] trait so the matching rules
//! can run outside a browser. The DOM implementation lives in [`crate::dom`].

/// Candidates are every element carrying this class.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Class token added to candidates that point at the current page.
pub const ACTIVE_CLASS: &str = "active";

/// A link-like handle the highlighter can inspect and mark.
pub trait NavLink {
    /// Fully qualified target address, or `None` if the element has no target.
    fn resolved_href(&self) -> Option<String>;

    /// Add `token` to the element's class set. Adding a present token is a no-op.
    fn add_class(&self, token: &str);
}

impl<T: NavLink + ?Sized> NavLink for &T {
    fn resolved_href(&self) -> Option<String> {
        (**self).resolved_href()
    }

    fn add_class(&self, token: &str) {
        (**self).add_class(token)
    }
}

/// Exact string equality. Addresses are not normalized, so `/about` and
/// `/about/` are different pages. A missing side never matches.
pub fn is_current(target: Option<&str>, current: Option<&str>) -> bool {
    match (target, current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Add [`ACTIVE_CLASS`] to every link whose target equals `current`.
///
/// Links are visited in the order given. Non-matching links are left
/// untouched, including any marker they already carry. Returns the number
/// of links that matched.
pub fn highlight_active_links<I>(current: Option<&str>, links: I) -> usize
where
    I: IntoIterator,
    I::Item: NavLink,
{
    let mut matched = 0;
    for link in links {
        if is_current(link.resolved_href().as_deref(), current) {
            link.add_class(ACTIVE_CLASS);
            matched += 1;
        }
    }
    matched
}
