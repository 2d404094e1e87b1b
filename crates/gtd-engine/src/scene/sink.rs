use super::Shape;

/// Accepts shapes issued by a scene traversal.
///
/// The scene only ever calls `draw_shape`; clearing and presenting the target
/// belong to whoever owns the surface.
pub trait DrawSink {
    /// Called once per node payload, in traversal order.
    fn draw_shape(&mut self, shape: &Shape);
}

/// Collects owned copies; handy for inspecting what a frame would draw.
impl DrawSink for Vec<Shape> {
    #[inline]
    fn draw_shape(&mut self, shape: &Shape) {
        self.push(shape.clone());
    }
}
