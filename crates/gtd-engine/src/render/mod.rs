//! GPU rendering of recorded scene frames.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod common;
mod ctx;
mod shape;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use shape::ShapeRenderer;
pub use tessellate::{tessellate, ShapeVertex, MAX_OUTLINE_POINTS};
