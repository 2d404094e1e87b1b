use crate::coords::Vec2;
use crate::paint::Color;

/// Axis-aligned rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub position: Vec2,
    pub size: Vec2,
    pub fill: Color,
}

impl RectShape {
    #[inline]
    pub fn new(size: Vec2) -> Self {
        Self {
            position: Vec2::zero(),
            size,
            fill: Color::white(),
        }
    }

    #[inline]
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Corners clockwise from the top-left.
    pub fn outline(&self) -> Vec<Vec2> {
        let Vec2 { x, y } = self.position;
        let Vec2 { x: w, y: h } = self.size;
        vec![
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ]
    }
}
