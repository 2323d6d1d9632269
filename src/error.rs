//! Error types for DOM-facing tooltip operations
//!
//! Placement itself never fails; these cover the browser collaborators
//! (missing window/document, rejected DOM calls, JS value conversion).

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum TooltipError {
    #[error("No global window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl TooltipError {
    /// Wrap a thrown JS value, keeping its message when it has one
    pub fn dom(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        TooltipError::Dom(msg)
    }
}

impl From<JsValue> for TooltipError {
    fn from(value: JsValue) -> Self {
        TooltipError::dom(value)
    }
}

impl From<serde_wasm_bindgen::Error> for TooltipError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        TooltipError::Serialization(e.to_string())
    }
}

impl From<TooltipError> for JsValue {
    fn from(e: TooltipError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TooltipError>;
