//! UI building blocks shared across pages

pub mod changelog_panel;
pub mod device_not_found;
pub mod first_visit_warning;
pub mod footer;
pub mod icons;
pub mod instructions_panel;
pub mod loading;
pub mod navbar;
pub mod unmaintained_warning;

/// Overlay panels stop the page behind them from scrolling.
pub(crate) fn lock_body_scroll() {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

pub(crate) fn unlock_body_scroll() {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().remove_property("overflow");
    }
}
