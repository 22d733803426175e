//! Dialog Commands

/// Blocking `window.confirm`; false if the dialog can't be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
