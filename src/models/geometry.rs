//! Geometry snapshots and placement results
//!
//! These are plain value types: an anchor/tooltip pair is measured fresh on
//! every show (or every pointer move in follow mode) and thrown away once a
//! `PlacementResult` has been produced from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anchor element box, document-relative
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorGeometry {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorGeometry {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Horizontal center of the anchor
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Bottom edge of the anchor
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Rendered size of the tooltip node (measured after content injection)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipGeometry {
    pub width: f64,
    pub height: f64,
}

impl TooltipGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible viewport. Only the width takes part in placement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

/// Page coordinates of the pointer (follow mode)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Requested placement
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlacementPreference {
    #[default]
    Auto,
    Left,
    Right,
    Top,
    Bottom,
}

impl PlacementPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementPreference::Auto => "auto",
            PlacementPreference::Left => "left",
            PlacementPreference::Right => "right",
            PlacementPreference::Top => "top",
            PlacementPreference::Bottom => "bottom",
        }
    }
}

impl FromStr for PlacementPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(PlacementPreference::Auto),
            "left" => Ok(PlacementPreference::Left),
            "right" => Ok(PlacementPreference::Right),
            "top" => Ok(PlacementPreference::Top),
            "bottom" => Ok(PlacementPreference::Bottom),
            other => Err(format!("Unknown tooltip position: {}", other)),
        }
    }
}

impl fmt::Display for PlacementPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal correction applied by the engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalSide {
    Left,
    Right,
}

/// Vertical marker applied by the engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// Resolved side, used to pick a style class
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    None,
}

impl From<HorizontalSide> for Side {
    fn from(side: HorizontalSide) -> Self {
        match side {
            HorizontalSide::Left => Side::Left,
            HorizontalSide::Right => Side::Right,
        }
    }
}

impl From<VerticalSide> for Side {
    fn from(side: VerticalSide) -> Self {
        match side {
            VerticalSide::Top => Side::Top,
            VerticalSide::Bottom => Side::Bottom,
        }
    }
}

/// Final offsets for the tooltip node
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    pub left: f64,
    pub top: f64,
    /// Vertical marker if any, else horizontal, else `None`
    pub side: Side,
    pub horizontal: Option<HorizontalSide>,
    pub vertical: Option<VerticalSide>,
    /// Anchor lives in a fixed container; style with the fixed class
    pub fixed: bool,
}

impl PlacementResult {
    /// Build a result, deriving `side` from the two axis markers
    pub fn new(
        left: f64,
        top: f64,
        horizontal: Option<HorizontalSide>,
        vertical: Option<VerticalSide>,
        fixed: bool,
    ) -> Self {
        let side = vertical
            .map(Side::from)
            .or_else(|| horizontal.map(Side::from))
            .unwrap_or(Side::None);

        Self {
            left,
            top,
            side,
            horizontal,
            vertical,
            fixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parse() {
        assert_eq!("left".parse::<PlacementPreference>(), Ok(PlacementPreference::Left));
        assert_eq!(" Bottom ".parse::<PlacementPreference>(), Ok(PlacementPreference::Bottom));
        assert!("sideways".parse::<PlacementPreference>().is_err());
    }

    #[test]
    fn test_side_prefers_vertical_marker() {
        let result = PlacementResult::new(
            0.0,
            0.0,
            Some(HorizontalSide::Left),
            Some(VerticalSide::Bottom),
            false,
        );
        assert_eq!(result.side, Side::Bottom);

        let result = PlacementResult::new(0.0, 0.0, Some(HorizontalSide::Right), None, false);
        assert_eq!(result.side, Side::Right);

        let result = PlacementResult::new(0.0, 0.0, None, None, false);
        assert_eq!(result.side, Side::None);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = PlacementResult::new(40.0, 70.0, None, None, true);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["side"], "none");
        assert_eq!(json["fixed"], true);
        assert_eq!(json["left"], 40.0);
    }
}
