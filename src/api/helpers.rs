//! Shared helpers for WASM API operations
//!
//! Serialization, deserialization and option parsing used by every
//! JS-facing entry point.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::TooltipOptions;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // Plain objects rather than ES Maps, so callers can read `result.left`
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Options
// ============================================================================

/// Read caller settings and merge them onto the defaults.
///
/// Never fails: anything unreadable falls back to the defaults.
pub fn options_from_js(settings: JsValue) -> TooltipOptions {
    if settings.is_undefined() || settings.is_null() {
        return TooltipOptions::default();
    }

    match deserialize::<serde_json::Value>(settings, "Failed to read tooltip options") {
        Ok(value) => TooltipOptions::merged(&value),
        Err(_) => TooltipOptions::default(),
    }
}
