//! Tooltip placement engine
//!
//! Pure functions: given the anchor box, the measured tooltip box, the
//! viewport width and a placement preference, compute the final offsets and
//! the side the tooltip was pushed toward. Nothing here touches the DOM.
//!
//! The configured `offset` is doubled before use, so the visible gap between
//! anchor and tooltip is `offset * 2` pixels.

use serde::{Deserialize, Serialize};

use crate::models::{
    AnchorGeometry, HorizontalSide, PlacementPreference, PlacementResult, Point, TooltipGeometry,
    VerticalSide, Viewport,
};

/// Below this ratio of viewport to tooltip width, the tooltip gets a max width
const CLAMP_RATIO: f64 = 1.5;

/// Pixel gap kept between anchor (or pointer) and tooltip for a configured offset
pub fn effective_gap(offset: f64) -> f64 {
    offset * 2.0
}

/// Everything `place` needs, in one serializable bundle for the JS API
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementRequest {
    pub anchor: AnchorGeometry,
    pub tooltip: TooltipGeometry,
    pub viewport: Viewport,
    pub preference: PlacementPreference,
    pub offset: f64,
    /// Pointer position; when present the anchor box is ignored
    pub follow_point: Option<Point>,
    pub fixed: bool,
}

impl PlacementRequest {
    pub fn resolve(&self) -> PlacementResult {
        let mut result = place(
            self.anchor,
            self.tooltip,
            self.viewport,
            self.preference,
            self.offset,
            self.follow_point,
        );
        result.fixed = self.fixed;
        result
    }
}

/// Compute the tooltip position.
///
/// With a `follow_point` the tooltip is centered above the pointer and no
/// overflow correction happens; otherwise see [`place_anchored`].
pub fn place(
    anchor: AnchorGeometry,
    tooltip: TooltipGeometry,
    viewport: Viewport,
    preference: PlacementPreference,
    offset: f64,
    follow_point: Option<Point>,
) -> PlacementResult {
    match follow_point {
        Some(point) => place_following(point, tooltip, offset),
        None => place_anchored(anchor, tooltip, viewport, preference, offset),
    }
}

/// Anchor-relative placement with viewport overflow correction.
///
/// Baseline is centered above the anchor. The left correction runs first;
/// the right-overflow check then sees the possibly corrected `left`, so a
/// tooltip corrected off the left edge can still be pushed right.
///
/// Vertically, an explicit `Top` preference is applied after the bottom flip
/// and always wins, even when the tooltip overflows the top edge.
pub fn place_anchored(
    anchor: AnchorGeometry,
    tooltip: TooltipGeometry,
    viewport: Viewport,
    preference: PlacementPreference,
    offset: f64,
) -> PlacementResult {
    let gap = effective_gap(offset);

    let mut left = anchor.center_x() - tooltip.width / 2.0;
    let mut top = anchor.top - tooltip.height - gap;

    let mut horizontal = None;
    if preference == PlacementPreference::Left || left < 0.0 {
        left = anchor.center_x() - gap;
        horizontal = Some(HorizontalSide::Left);
    }
    if preference == PlacementPreference::Right || left + tooltip.width > viewport.width {
        left = anchor.left - tooltip.width + anchor.width / 2.0 + gap;
        horizontal = Some(HorizontalSide::Right);
    }

    let mut vertical = None;
    if preference == PlacementPreference::Bottom || top < 0.0 {
        top = anchor.bottom() + gap;
        vertical = Some(VerticalSide::Bottom);
    }
    if preference == PlacementPreference::Top {
        top = anchor.top - tooltip.height - gap;
        vertical = Some(VerticalSide::Top);
    }

    PlacementResult::new(left, top, horizontal, vertical, false)
}

/// Follow-pointer placement: centered above the pointer, never corrected
pub fn place_following(point: Point, tooltip: TooltipGeometry, offset: f64) -> PlacementResult {
    let left = point.x - tooltip.width / 2.0;
    let top = point.y - tooltip.height - effective_gap(offset);

    PlacementResult::new(left, top, None, None, false)
}

/// Max width to impose when the viewport is too narrow for the tooltip.
///
/// Returns `Some(viewport / 2)` when `viewport < tooltip * 1.5`.
pub fn clamp_max_width(tooltip_width: f64, viewport_width: f64) -> Option<f64> {
    if viewport_width < tooltip_width * CLAMP_RATIO {
        Some(viewport_width / 2.0)
    } else {
        None
    }
}
