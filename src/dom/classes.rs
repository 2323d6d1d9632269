//! CSS class helpers
//!
//! Free functions instead of methods bolted onto every DOM object.

use web_sys::Element;

use crate::error::{Result, TooltipError};
use crate::models::{HorizontalSide, PlacementResult, TooltipOptions, VerticalSide};

/// Split a configured class string into individual tokens
pub fn class_tokens(class_name: &str) -> impl Iterator<Item = &str> {
    class_name.split_whitespace()
}

pub fn add_class(element: &Element, class_name: &str) -> Result<()> {
    let list = element.class_list();
    for token in class_tokens(class_name) {
        list.add_1(token).map_err(TooltipError::dom)?;
    }
    Ok(())
}

pub fn remove_class(element: &Element, class_name: &str) -> Result<()> {
    let list = element.class_list();
    for token in class_tokens(class_name) {
        list.remove_1(token).map_err(TooltipError::dom)?;
    }
    Ok(())
}

pub fn has_class(element: &Element, class_name: &str) -> bool {
    let list = element.class_list();
    let mut tokens = class_tokens(class_name).peekable();
    tokens.peek().is_some() && tokens.all(|token| list.contains(token))
}

/// Marker classes to add and remove for a placement result
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerClasses<'a> {
    pub add: Vec<&'a str>,
    pub remove: Vec<&'a str>,
}

/// Work out which side markers a result implies.
///
/// Every side class not implied by `result` ends up in `remove`, so stale
/// markers from a previous show are cleared.
pub fn marker_classes<'a>(
    result: &PlacementResult,
    options: &'a TooltipOptions,
) -> MarkerClasses<'a> {
    let mut markers = MarkerClasses::default();

    let sides = [
        (result.horizontal == Some(HorizontalSide::Left), options.class_left.as_str()),
        (result.horizontal == Some(HorizontalSide::Right), options.class_right.as_str()),
        (result.vertical == Some(VerticalSide::Top), options.class_top.as_str()),
        (result.vertical == Some(VerticalSide::Bottom), options.class_bottom.as_str()),
        (result.fixed, options.class_fixed.as_str()),
    ];

    for (on, class_name) in sides {
        if on {
            markers.add.push(class_name);
        } else {
            markers.remove.push(class_name);
        }
    }

    markers
}

/// Apply the side markers for `result` to the tooltip node
pub fn apply_markers(
    element: &Element,
    result: &PlacementResult,
    options: &TooltipOptions,
) -> Result<()> {
    let markers = marker_classes(result, options);
    for class_name in markers.remove {
        remove_class(element, class_name)?;
    }
    for class_name in markers.add {
        add_class(element, class_name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens() {
        let tokens: Vec<_> = class_tokens("  tooltip  tooltip--dark ").collect();
        assert_eq!(tokens, vec!["tooltip", "tooltip--dark"]);
        assert_eq!(class_tokens("").count(), 0);
    }

    #[test]
    fn test_markers_for_centered_result() {
        let options = TooltipOptions::default();
        let result = PlacementResult::new(0.0, 0.0, None, None, false);
        let markers = marker_classes(&result, &options);

        assert!(markers.add.is_empty());
        assert_eq!(markers.remove.len(), 5);
    }

    #[test]
    fn test_markers_for_corrected_result() {
        let options = TooltipOptions::default();
        let result = PlacementResult::new(
            0.0,
            0.0,
            Some(HorizontalSide::Left),
            Some(VerticalSide::Bottom),
            true,
        );
        let markers = marker_classes(&result, &options);

        assert_eq!(markers.add, vec!["tooltip--left", "tooltip--bottom", "tooltip--fixed"]);
        assert_eq!(markers.remove, vec!["tooltip--right", "tooltip--top"]);
    }
}
