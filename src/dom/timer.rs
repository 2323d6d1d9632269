//! Deferred callbacks
//!
//! Fire-and-forget `setTimeout`: not cancellable, never awaited.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{Result, TooltipError};

/// Run `callback` once after `delay_ms` milliseconds
pub fn defer<F>(delay_ms: f64, callback: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let window = super::window()?;
    let closure = Closure::once(callback);

    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout_millis(delay_ms),
        )
        .map_err(TooltipError::dom)?;

    // The browser owns the callback from here on
    closure.forget();
    Ok(())
}

/// Clamp a configured delay into the range `setTimeout` accepts
pub fn timeout_millis(delay_ms: f64) -> i32 {
    if delay_ms.is_finite() && delay_ms > 0.0 {
        delay_ms.min(i32::MAX as f64) as i32
    } else {
        0
    }
}
