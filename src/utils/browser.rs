//! Thin wrappers over `window` used by event handlers. Never called during
//! server rendering.
use leptos::logging::warn;

use crate::contact::LinkOpener;

/// Opens links in a new tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLinkOpener;

impl LinkOpener for BrowserLinkOpener {
    fn open(&self, url: &str) {
        if let Err(err) = gloo_utils::window().open_with_url_and_target(url, "_blank") {
            warn!("[BROWSER] Could not open {}: {:?}", url, err);
        }
    }
}

/// Blocking confirmation prompt. A prompt that cannot be shown counts as
/// declined.
pub fn confirm(message: &str) -> bool {
    gloo_utils::window()
        .confirm_with_message(message)
        .unwrap_or(false)
}

pub fn confirm_delete(noun: &str) -> bool {
    confirm(&format!("Are you sure you want to delete this {noun}?"))
}

pub fn scroll_to_top() {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}
