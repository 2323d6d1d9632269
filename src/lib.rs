//! Tooltip WASM Module
//!
//! A small tooltip widget for the browser: attaches a floating annotation to
//! a DOM element, shows it on a trigger event and removes it after a
//! trigger-off event, placing it so it stays inside the viewport.
//!
//! The placement rules live in [`placement`] and are pure; everything that
//! touches the DOM lives in [`dom`] and [`widget`].

pub mod api;
pub mod dom;
pub mod error;
pub mod models;
pub mod placement;
pub mod widget;

// Re-export commonly used types
pub use error::TooltipError;
pub use models::*;
pub use placement::{place, place_anchored, place_following, PlacementRequest};
pub use widget::{Tooltip, Tooltips};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    log::info!("Tooltip WASM module initialized");
}
