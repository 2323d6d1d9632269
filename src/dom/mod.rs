//! DOM collaborators
//!
//! Thin wrappers over `web_sys` used by the widget: class toggling,
//! measuring anchor/tooltip/viewport geometry, writing styles and content,
//! and deferred callbacks.

pub mod classes;
pub mod measure;
pub mod timer;

pub use classes::*;
pub use measure::*;
pub use timer::defer;
