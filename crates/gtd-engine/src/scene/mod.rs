//! Retained scene: a forest of owned drawable nodes.
//!
//! Responsibilities:
//! - own shape payloads by value (`shapes`)
//! - keep a strict tree of nodes with stable insertion order (`node`)
//! - issue shapes to a `DrawSink` in pre-order, roots first to last (`renderer`)
//! - record a frame's draw stream for the GPU renderer (`list`)

mod list;
mod node;
mod renderer;
mod shapes;
mod sink;

pub use list::DrawList;
pub use node::{Iter, SceneNode};
pub use renderer::SceneRenderer;
pub use shapes::{CircleShape, RectShape, Shape};
pub use sink::DrawSink;
