//! Fill colors for scene shapes.
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
