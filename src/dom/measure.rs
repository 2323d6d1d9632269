//! Geometry measurement and style/content writes

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, TooltipError};
use crate::models::{AnchorGeometry, PlacementResult, TooltipGeometry, Viewport};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(TooltipError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(TooltipError::NoDocument)
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or(TooltipError::NoBody)
}

/// Visible width: the larger of the root element's client width and
/// `window.innerWidth`
pub fn viewport(window: &Window) -> Viewport {
    let client_width = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| root.client_width() as f64)
        .unwrap_or(0.0);
    let inner_width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);

    Viewport::new(client_width.max(inner_width))
}

/// Document-relative box of the anchor element
pub fn anchor_geometry(window: &Window, target: &Element) -> AnchorGeometry {
    let rect = target.get_bounding_client_rect();
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    // offsetWidth/Height when available (layout box, ignores transforms)
    let (width, height) = match target.dyn_ref::<HtmlElement>() {
        Some(html) => (html.offset_width() as f64, html.offset_height() as f64),
        None => (rect.width(), rect.height()),
    };

    AnchorGeometry::new(rect.top() + scroll_y, rect.left() + scroll_x, width, height)
}

pub fn tooltip_geometry(node: &HtmlElement) -> TooltipGeometry {
    TooltipGeometry::new(node.offset_width() as f64, node.offset_height() as f64)
}

pub fn apply_position(node: &HtmlElement, result: &PlacementResult) -> Result<()> {
    let style = node.style();
    style
        .set_property("left", &format!("{}px", result.left))
        .map_err(TooltipError::dom)?;
    style
        .set_property("top", &format!("{}px", result.top))
        .map_err(TooltipError::dom)?;
    Ok(())
}

pub fn set_max_width(node: &HtmlElement, width: f64) -> Result<()> {
    node.style()
        .set_property("max-width", &format!("{}px", width))
        .map_err(TooltipError::dom)
}

/// Inject content as markup or as plain text
pub fn set_content(node: &HtmlElement, content: &str, as_html: bool) {
    if as_html {
        node.set_inner_html(content);
    } else {
        node.set_text_content(Some(content));
    }
}

pub fn is_attached(node: &HtmlElement) -> bool {
    node.parent_node().is_some()
}

/// Remove the node from its parent; no-op when already detached
pub fn detach(node: &HtmlElement) {
    if is_attached(node) {
        node.remove();
    }
}
