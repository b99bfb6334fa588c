//! Thin wrappers over the window APIs the page needs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Blocking `alert()`; silently skipped outside a browser window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Run `f` once after `delay_ms`. Returns the timeout handle.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = Closure::once(f);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .ok()?;
    callback.forget();
    Some(id)
}

pub fn clear_timeout(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(id);
    }
}

/// Keep at most one pending timer in `slot`: clear the previous handle
/// before arming the next one.
pub fn rearm<H>(slot: &mut Option<H>, clear: impl FnOnce(H), arm: impl FnOnce() -> Option<H>) {
    if let Some(previous) = slot.take() {
        clear(previous);
    }
    *slot = arm();
}
