//! Models module for the tooltip widget
//!
//! Geometry snapshots, placement results and widget configuration.

pub mod geometry;
pub mod options;

// Re-export commonly used types
pub use geometry::*;
pub use options::TooltipOptions;
