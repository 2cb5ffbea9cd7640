//! Console output for the browser build.

const PREFIX: &str = "navmark";

/// Log a warning for a DOM call that failed but does not stop the pass.
pub fn warn(msg: &str) {
    let line = format!("{}: {}", PREFIX, msg);
    web_sys::console::warn_1(&line.into());
}

pub fn debug(msg: &str) {
    let line = format!("{}: {}", PREFIX, msg);
    web_sys::console::debug_1(&line.into());
}
