//! Tooltip widget
//!
//! One `Tooltip` per anchor element. The widget owns its tooltip node and
//! every event listener it registers; `destroy()` (or dropping the last
//! handle) unbinds them all and detaches the node.

pub mod registry;

pub use registry::Tooltips;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};

use crate::api::helpers::options_from_js;
use crate::dom;
use crate::error::{Result, TooltipError};
use crate::models::{Point, TooltipOptions};
use crate::placement::{clamp_max_width, place};

thread_local! {
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

fn next_id() -> u32 {
    NEXT_ID.with(|id| {
        let current = id.get();
        id.set(current.wrapping_add(1));
        current
    })
}

/// A registered DOM event listener, kept so it can be removed again
struct Listener {
    target: Element,
    event: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn bind(target: &Element, event: &str, callback: Closure<dyn FnMut(Event)>) -> Result<Self> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(TooltipError::dom)?;

        Ok(Self {
            target: target.clone(),
            event: event.to_string(),
            callback,
        })
    }

    fn unbind(&self) {
        let callback = self.callback.as_ref().unchecked_ref();
        if let Err(e) = self.target.remove_event_listener_with_callback(&self.event, callback) {
            log::warn!("Failed to unbind '{}' listener: {:?}", self.event, e);
        }
    }
}

struct TooltipInner {
    id: u32,
    options: TooltipOptions,
    target: Element,
    content: Option<String>,
    node: HtmlElement,
    listeners: RefCell<Vec<Listener>>,
    /// Between `show()` and the next `remove()`; follow mode reveals later
    shown: Cell<bool>,
    trigger_off_bound: Cell<bool>,
    destroyed: Cell<bool>,
}

impl TooltipInner {
    fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    fn listen<F>(self: &Rc<Self>, event: &str, handler: F) -> Result<()>
    where
        F: Fn(&Rc<TooltipInner>, Event) -> Result<()> + 'static,
    {
        let weak: Weak<TooltipInner> = Rc::downgrade(self);
        let event_name = event.to_string();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if let Err(e) = handler(&inner, event) {
                log::warn!("Tooltip {} '{}' handler failed: {}", inner.id, event_name, e);
            }
        });

        let listener = Listener::bind(&self.target, event, callback)?;
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }

    fn bind_initial_listeners(self: &Rc<Self>) -> Result<()> {
        if let Some(trigger) = self.options.trigger.clone() {
            self.listen(&trigger, |inner, _event| inner.show())?;
        }

        if self.options.follow {
            self.listen("mousemove", |inner, event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return Ok(());
                };
                if !inner.shown.get() || !dom::is_attached(&inner.node) {
                    return Ok(());
                }
                let point = Point::new(event.page_x() as f64, event.page_y() as f64);
                inner.render(Some(point))
            })?;
        }

        Ok(())
    }

    fn show(self: &Rc<Self>) -> Result<()> {
        if self.destroyed.get() {
            return Ok(());
        }

        let content = match self.content.as_deref() {
            Some(content) if !content.is_empty() => content,
            _ => {
                log::debug!("Tooltip {} has no content, nothing to show", self.id);
                return Ok(());
            }
        };

        dom::set_content(&self.node, content, self.options.html);
        dom::body()?
            .append_child(&self.node)
            .map_err(TooltipError::dom)?;
        self.shown.set(true);

        if self.options.fixed {
            dom::add_class(&self.node, &self.options.class_fixed)?;
        }

        // In follow mode the first pointer move positions and reveals it
        if !self.options.follow {
            self.render(None)?;
        }

        if !self.trigger_off_bound.get() {
            let trigger_off = self.options.trigger_off.clone();
            self.listen(&trigger_off, |inner, _event| inner.schedule_remove())?;
            self.trigger_off_bound.set(true);
        }

        log::debug!("Tooltip {} shown", self.id);
        Ok(())
    }

    /// Measure, place and reveal the tooltip node
    fn render(&self, follow_point: Option<Point>) -> Result<()> {
        let window = dom::window()?;
        let viewport = dom::viewport(&window);
        let anchor = dom::anchor_geometry(&window, &self.target);
        let mut tooltip = dom::tooltip_geometry(&self.node);

        if let Some(max_width) = clamp_max_width(tooltip.width, viewport.width) {
            dom::set_max_width(&self.node, max_width)?;
            if self.options.remeasure_after_clamp {
                tooltip = dom::tooltip_geometry(&self.node);
            }
        }

        let mut result = place(
            anchor,
            tooltip,
            viewport,
            self.options.position,
            self.options.offset,
            follow_point,
        );
        result.fixed = self.options.fixed;

        dom::apply_position(&self.node, &result)?;
        dom::apply_markers(&self.node, &result, &self.options)?;
        dom::add_class(&self.node, &self.options.class_shown)?;
        Ok(())
    }

    fn schedule_remove(self: &Rc<Self>) -> Result<()> {
        let weak = Rc::downgrade(self);
        dom::defer(self.options.delay, move || {
            if let Some(inner) = weak.upgrade() {
                if let Err(e) = inner.remove() {
                    log::warn!("Tooltip {} removal failed: {}", inner.id, e);
                }
            }
        })
    }

    /// Drop the shown class, then detach the node once the transition ends
    fn remove(self: &Rc<Self>) -> Result<()> {
        self.shown.set(false);
        dom::remove_class(&self.node, &self.options.class_shown)?;

        let weak = Rc::downgrade(self);
        dom::defer(self.options.speed, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // shown again while fading out
            if inner.shown.get() {
                return;
            }
            dom::detach(&inner.node);
            log::debug!("Tooltip {} removed", inner.id);
        })
    }

    fn teardown(&self) {
        if self.destroyed.replace(true) {
            return;
        }

        for listener in self.listeners.borrow_mut().drain(..) {
            listener.unbind();
        }
        self.trigger_off_bound.set(false);
        self.shown.set(false);
        dom::detach(&self.node);

        log::debug!("Tooltip {} destroyed", self.id);
    }
}

impl Drop for TooltipInner {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Handle to a tooltip attached to one anchor element
#[wasm_bindgen]
#[derive(Clone)]
pub struct Tooltip {
    inner: Rc<TooltipInner>,
}

impl Tooltip {
    /// Create a tooltip for `element` and bind its trigger listener
    pub fn with_options(element: Element, options: TooltipOptions) -> Result<Self> {
        let document = dom::document()?;
        let node: HtmlElement = document
            .create_element("div")
            .map_err(TooltipError::dom)?
            .dyn_into()
            .map_err(|_| TooltipError::Dom("created element is not an HtmlElement".to_string()))?;

        dom::add_class(&node, &options.class_name)?;
        node.set_attribute("role", "tooltip").map_err(TooltipError::dom)?;

        let content = element.get_attribute(&options.content_attribute());

        let inner = Rc::new(TooltipInner {
            id: next_id(),
            options,
            target: element,
            content,
            node,
            listeners: RefCell::new(Vec::new()),
            shown: Cell::new(false),
            trigger_off_bound: Cell::new(false),
            destroyed: Cell::new(false),
        });
        inner.bind_initial_listeners()?;

        log::debug!(
            "Tooltip {} created (trigger: {:?}, follow: {})",
            inner.id,
            inner.options.trigger,
            inner.options.follow
        );
        Ok(Self { inner })
    }

    pub fn options(&self) -> &TooltipOptions {
        &self.inner.options
    }

    pub fn target(&self) -> &Element {
        &self.inner.target
    }

    /// Number of DOM listeners currently registered by this widget
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

#[wasm_bindgen]
impl Tooltip {
    #[wasm_bindgen(constructor)]
    pub fn new(element: Element, options: JsValue) -> std::result::Result<Tooltip, JsValue> {
        let options = options_from_js(options);
        Tooltip::with_options(element, options).map_err(JsValue::from)
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 {
        self.inner.id
    }

    #[wasm_bindgen(getter)]
    pub fn content(&self) -> Option<String> {
        self.inner.content.clone()
    }

    #[wasm_bindgen(getter, js_name = hasContent)]
    pub fn has_content(&self) -> bool {
        self.inner.has_content()
    }

    /// The tooltip node itself (attached to the body only while shown)
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> HtmlElement {
        self.inner.node.clone()
    }

    #[wasm_bindgen(getter, js_name = isShown)]
    pub fn is_shown(&self) -> bool {
        dom::is_attached(&self.inner.node)
            && dom::has_class(&self.inner.node, &self.inner.options.class_shown)
    }

    #[wasm_bindgen(getter, js_name = isDestroyed)]
    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.get()
    }

    /// Render and place the tooltip. Silent no-op without content.
    pub fn show(&self) -> std::result::Result<(), JsValue> {
        self.inner.show().map_err(JsValue::from)
    }

    /// Hide the tooltip and detach it after the transition
    pub fn remove(&self) -> std::result::Result<(), JsValue> {
        self.inner.remove().map_err(JsValue::from)
    }

    /// Unbind every listener and detach the node. Safe to call twice.
    pub fn destroy(&self) {
        self.inner.teardown();
    }
}
