//! Bulk tooltip construction and the handle collection that owns them

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::Tooltip;
use crate::api::helpers::options_from_js;
use crate::dom;
use crate::error::{Result, TooltipError};
use crate::models::TooltipOptions;

/// Owns one `Tooltip` per matched element, all sharing the same options
#[wasm_bindgen]
#[derive(Default)]
pub struct Tooltips {
    tooltips: Vec<Tooltip>,
}

impl Tooltips {
    /// Build a tooltip for every element matching `selector`
    pub fn from_selector(selector: &str, options: &TooltipOptions) -> Result<Self> {
        let nodes = dom::document()?
            .query_selector_all(selector)
            .map_err(TooltipError::dom)?;

        let elements = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok());

        let tooltips = Self::from_elements(elements, options)?;
        log::debug!("Attached {} tooltips for '{}'", tooltips.len(), selector);
        Ok(tooltips)
    }

    pub fn from_elements<I>(elements: I, options: &TooltipOptions) -> Result<Self>
    where
        I: IntoIterator<Item = Element>,
    {
        let mut tooltips = Self::default();
        for element in elements {
            tooltips.push(Tooltip::with_options(element, options.clone())?);
        }
        Ok(tooltips)
    }

    pub fn push(&mut self, tooltip: Tooltip) {
        self.tooltips.push(tooltip);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tooltip> {
        self.tooltips.iter()
    }
}

#[wasm_bindgen]
impl Tooltips {
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: JsValue) -> std::result::Result<Tooltips, JsValue> {
        let options = options_from_js(options);
        Tooltips::from_selector(selector, &options).map_err(JsValue::from)
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.tooltips.len()
    }

    pub fn len(&self) -> usize {
        self.tooltips.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.tooltips.is_empty()
    }

    /// Handle ids, in selector match order
    pub fn ids(&self) -> Vec<u32> {
        self.tooltips.iter().map(|t| t.id()).collect()
    }

    pub fn get(&self, id: u32) -> Option<Tooltip> {
        self.tooltips.iter().find(|t| t.id() == id).cloned()
    }

    /// Hide every tooltip in the collection
    #[wasm_bindgen(js_name = removeAll)]
    pub fn remove_all(&self) -> std::result::Result<(), JsValue> {
        for tooltip in &self.tooltips {
            tooltip.remove()?;
        }
        Ok(())
    }

    /// Destroy one tooltip by handle and drop it from the collection
    pub fn remove(&mut self, id: u32) -> bool {
        match self.tooltips.iter().position(|t| t.id() == id) {
            Some(index) => {
                let tooltip = self.tooltips.remove(index);
                tooltip.destroy();
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = destroyAll)]
    pub fn destroy_all(&mut self) {
        for tooltip in self.tooltips.drain(..) {
            tooltip.destroy();
        }
    }
}
