//! Placement engine properties
//!
//! Exercises the overflow rules through the public API with the scenarios
//! a tooltip actually hits on a page: comfortable middle placement, anchors
//! hugging either edge, forced sides and follow mode.

use tooltip_wasm::*;

const OFFSET: f64 = 5.0;
const GAP: f64 = OFFSET * 2.0;

fn tooltip() -> TooltipGeometry {
    TooltipGeometry::new(40.0, 20.0)
}

fn viewport() -> Viewport {
    Viewport::new(500.0)
}

fn baseline_left(anchor: &AnchorGeometry, tooltip: &TooltipGeometry) -> f64 {
    anchor.left + anchor.width / 2.0 - tooltip.width / 2.0
}

#[test]
fn test_anchors_that_fit_stay_centered() {
    for left in [20.0, 50.0, 120.0, 300.0, 460.0] {
        let anchor = AnchorGeometry::new(200.0, left, 20.0, 10.0);
        let result = place(anchor, tooltip(), viewport(), PlacementPreference::Auto, OFFSET, None);

        let expected = baseline_left(&anchor, &tooltip());
        assert!(expected >= 0.0 && expected + tooltip().width <= viewport().width);
        assert_eq!(result.left, expected, "anchor at {}", left);
        assert_eq!(result.horizontal, None, "anchor at {}", left);
        assert_eq!(result.side, Side::None);
    }
}

#[test]
fn test_example_scenario_centered() {
    let anchor = AnchorGeometry::new(100.0, 50.0, 20.0, 10.0);
    let result = place(anchor, tooltip(), viewport(), PlacementPreference::Auto, OFFSET, None);

    assert_eq!(result.left, 40.0);
    assert_eq!(result.top, 70.0);
    assert_eq!(result.side, Side::None);
}

#[test]
fn test_example_scenario_left_edge() {
    let anchor = AnchorGeometry::new(100.0, 0.0, 20.0, 10.0);
    let result = place(anchor, tooltip(), viewport(), PlacementPreference::Auto, OFFSET, None);

    assert_eq!(result.left, 0.0);
    assert_eq!(result.side, Side::Left);
}

#[test]
fn test_left_overflow_corrects_from_anchor_center() {
    for left in [0.0, 2.0, 5.0] {
        let anchor = AnchorGeometry::new(100.0, left, 20.0, 10.0);
        assert!(baseline_left(&anchor, &tooltip()) < 0.0);

        let result = place(anchor, tooltip(), viewport(), PlacementPreference::Auto, OFFSET, None);
        assert_eq!(result.side, Side::Left);
        assert_eq!(result.left, anchor.left + anchor.width / 2.0 - GAP);
    }
}

#[test]
fn test_right_overflow_corrects_from_anchor_center() {
    for left in [475.0, 480.0, 495.0] {
        let anchor = AnchorGeometry::new(100.0, left, 20.0, 10.0);
        assert!(baseline_left(&anchor, &tooltip()) + tooltip().width > viewport().width);

        let result = place(anchor, tooltip(), viewport(), PlacementPreference::Auto, OFFSET, None);
        assert_eq!(result.side, Side::Right);
        assert_eq!(
            result.left,
            anchor.left - tooltip().width + anchor.width / 2.0 + GAP
        );
    }
}

#[test]
fn test_bottom_preference_always_below() {
    // plenty of room above, still placed below
    for top in [5.0, 100.0, 900.0] {
        let anchor = AnchorGeometry::new(top, 200.0, 20.0, 10.0);
        let result =
            place(anchor, tooltip(), viewport(), PlacementPreference::Bottom, OFFSET, None);

        assert_eq!(result.side, Side::Bottom);
        assert_eq!(result.top, anchor.top + anchor.height + GAP);
    }
}

#[test]
fn test_placement_is_deterministic() {
    let request = PlacementRequest {
        anchor: AnchorGeometry::new(3.0, 497.0, 12.0, 8.0),
        tooltip: TooltipGeometry::new(180.0, 44.0),
        viewport: Viewport::new(320.0),
        preference: PlacementPreference::Auto,
        offset: OFFSET,
        follow_point: None,
        fixed: false,
    };

    let first = request.resolve();
    let second = request.resolve();
    assert_eq!(first, second);
}

#[test]
fn test_follow_mode_centers_above_pointer() {
    let anchor = AnchorGeometry::new(100.0, 50.0, 20.0, 10.0);
    let pointer = Point::new(250.0, 400.0);
    let result = place(
        anchor,
        tooltip(),
        viewport(),
        PlacementPreference::Auto,
        OFFSET,
        Some(pointer),
    );

    assert_eq!(result.left, 230.0);
    assert_eq!(result.top, 370.0);
}

#[test]
fn test_follow_mode_can_leave_viewport() {
    let anchor = AnchorGeometry::new(100.0, 50.0, 20.0, 10.0);
    let pointer = Point::new(499.0, 2.0);
    let result = place(
        anchor,
        tooltip(),
        viewport(),
        PlacementPreference::Auto,
        OFFSET,
        Some(pointer),
    );

    assert!(result.left + tooltip().width > viewport().width);
    assert!(result.top < 0.0);
    assert_eq!(result.side, Side::None);
}

#[test]
fn test_request_from_json() {
    let request: PlacementRequest = serde_json::from_value(serde_json::json!({
        "anchor": { "top": 100, "left": 0, "width": 20, "height": 10 },
        "tooltip": { "width": 40, "height": 20 },
        "viewport": { "width": 500 },
        "preference": "auto",
        "offset": 5
    }))
    .unwrap();

    let result = request.resolve();
    assert_eq!(result.left, 0.0);
    assert_eq!(result.side, Side::Left);
    assert!(!result.fixed);
}
