//! User feedback for the form. Both outcomes of a submission are reported in the
//! browser's blocking alert dialog.

/// Shows `message` in the browser's modal alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
