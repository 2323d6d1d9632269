//! Tooltip WASM API
//!
//! JavaScript-facing free functions. The widget classes themselves
//! (`Tooltip`, `Tooltips`) are exported from `crate::widget`.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization and option parsing
//! - `placement`: Pure placement entry points (no DOM access)
//! - `widgets`: Selector-based attachment

pub mod helpers;
pub mod placement;
pub mod widgets;

pub use placement::{clamp_max_width_js, compute_placement, default_options};
pub use widgets::attach_tooltips;
