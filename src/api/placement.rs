//! Placement API
//!
//! Exposes the pure placement engine to JavaScript so hosts that manage
//! their own DOM can still use the overflow rules.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize};
use crate::models::TooltipOptions;
use crate::placement::{clamp_max_width, PlacementRequest};

/// Compute a placement
///
/// # Parameters
/// - `request_js`: `{ anchor, tooltip, viewport, preference, offset, followPoint?, fixed }`
///
/// # Returns
/// `{ left, top, side, horizontal, vertical, fixed }`
#[wasm_bindgen(js_name = computePlacement)]
pub fn compute_placement(request_js: JsValue) -> Result<JsValue, JsValue> {
    let request: PlacementRequest = deserialize(request_js, "Failed to read placement request")?;
    let result = request.resolve();

    log::debug!(
        "computePlacement: preference={} -> left={}, top={}, side={:?}",
        request.preference,
        result.left,
        result.top,
        result.side
    );

    serialize(&result, "Failed to serialize placement result")
}

/// Max width to impose on a tooltip, or `undefined` when it fits
#[wasm_bindgen(js_name = clampMaxWidth)]
pub fn clamp_max_width_js(tooltip_width: f64, viewport_width: f64) -> Option<f64> {
    clamp_max_width(tooltip_width, viewport_width)
}

/// The default widget configuration
#[wasm_bindgen(js_name = defaultOptions)]
pub fn default_options() -> Result<JsValue, JsValue> {
    serialize(&TooltipOptions::default(), "Failed to serialize default options")
}
