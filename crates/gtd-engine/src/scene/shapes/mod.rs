//! Drawable payloads carried by scene nodes.
//!
//! Adding a primitive:
//! - add a module here with a plain-value shape type
//! - add a `Shape` variant and a `From` impl
//! - extend `outline` / `fill`; the GPU renderer tessellates any convex outline

mod circle;
mod rect;

pub use circle::CircleShape;
pub use rect::RectShape;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Closed set of primitives a node can draw.
///
/// Shapes are owned values: a node keeps its own copy, so later edits to the
/// descriptor the caller passed in never reach the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(CircleShape),
    Rect(RectShape),
}

impl Shape {
    /// Convex outline in logical pixels, in drawing order.
    pub fn outline(&self) -> Vec<Vec2> {
        match self {
            Shape::Circle(c) => c.outline(),
            Shape::Rect(r) => r.outline(),
        }
    }

    /// Number of points `outline` would return, without building it.
    #[inline]
    pub fn outline_len(&self) -> usize {
        match self {
            Shape::Circle(c) => c.point_count as usize,
            Shape::Rect(_) => 4,
        }
    }

    #[inline]
    pub fn fill(&self) -> Color {
        match self {
            Shape::Circle(c) => c.fill,
            Shape::Rect(r) => r.fill,
        }
    }

    /// Bounding box of the outline. Zero-sized at the origin for shapes with
    /// no outline points.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(&self.outline()).unwrap_or_default()
    }
}

impl From<CircleShape> for Shape {
    #[inline]
    fn from(c: CircleShape) -> Self {
        Shape::Circle(c)
    }
}

impl From<RectShape> for Shape {
    #[inline]
    fn from(r: RectShape) -> Self {
        Shape::Rect(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_bounds_match_position_and_size() {
        let s: Shape = RectShape::new(Vec2::new(30.0, 20.0))
            .with_position(Vec2::new(5.0, 6.0))
            .into();
        assert_eq!(s.bounds(), Rect::new(5.0, 6.0, 30.0, 20.0));
    }

    #[test]
    fn circle_bounds_are_the_diameter_box() {
        let s: Shape = CircleShape::new(80.0, 4).into();
        let b = s.bounds();
        assert!((b.size.x - 160.0).abs() < 1e-3);
        assert!((b.size.y - 160.0).abs() < 1e-3);
    }

    #[test]
    fn empty_outline_has_default_bounds() {
        let s: Shape = CircleShape::new(10.0, 0).into();
        assert_eq!(s.bounds(), Rect::default());
    }

    #[test]
    fn outline_len_matches_outline() {
        let circle: Shape = CircleShape::new(10.0, 7).into();
        let rect: Shape = RectShape::new(Vec2::splat(1.0)).into();
        assert_eq!(circle.outline_len(), circle.outline().len());
        assert_eq!(rect.outline_len(), rect.outline().len());
    }

    #[test]
    fn outline_len_of_huge_circle_is_cheap() {
        let s: Shape = CircleShape::new(10.0, u32::MAX).into();
        assert_eq!(s.outline_len(), u32::MAX as usize);
    }

    #[test]
    fn fill_is_forwarded_from_the_variant() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        let s: Shape = CircleShape::new(1.0, 3).with_fill(red).into();
        assert_eq!(s.fill(), red);
    }
}
