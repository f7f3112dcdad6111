//! Mirrors the dark-mode preference onto the `<html>` element.
//!
//! The preference itself lives in the personalization store; this module
//! only touches the DOM. SSR paths no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Add or remove the `dark-mode` class on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let classes = el.class_list();
        let result = if enabled { classes.add_1(DARK_MODE_CLASS) } else { classes.remove_1(DARK_MODE_CLASS) };
        if result.is_err() {
            log::warn!("failed to update {DARK_MODE_CLASS} class");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
