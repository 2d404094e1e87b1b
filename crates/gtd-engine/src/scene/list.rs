use super::{DrawSink, Shape};

/// Recorded draw stream for a frame.
///
/// Items keep the order in which they were issued; the GPU renderer replays
/// them in that order so later items paint over earlier ones.
///
/// - `push()` is O(1)
/// - `clear()` keeps the allocation, so a warmed list does not allocate per frame
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<Shape>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in issue order.
    #[inline]
    pub fn items(&self) -> &[Shape] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, shape: Shape) {
        self.items.push(shape);
    }
}

impl DrawSink for DrawList {
    #[inline]
    fn draw_shape(&mut self, shape: &Shape) {
        self.push(shape.clone());
    }
}
