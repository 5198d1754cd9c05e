use web_sys as web;

use crate::core::PlayerError;

/// Error surface: a blocking alert so the failure is impossible to miss,
/// plus a console line carrying the underlying detail.
pub fn report(err: &PlayerError) {
    log::error!("[player] {err}");
    if let Some(window) = web::window() {
        _ = window.alert_with_message(&err.user_message());
    }
}
