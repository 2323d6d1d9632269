//! Selector-based attachment, the plugin-style entry point

use wasm_bindgen::prelude::*;

use crate::widget::Tooltips;

/// Attach a tooltip to every element matching `selector`
#[wasm_bindgen(js_name = attachTooltips)]
pub fn attach_tooltips(selector: &str, options: JsValue) -> Result<Tooltips, JsValue> {
    Tooltips::new(selector, options)
}
