use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;

/// Circle payload, approximated by a regular polygon.
///
/// `position` is the top-left corner of the bounding box, so the centre sits at
/// `position + (radius, radius)`. Low point counts give regular polygons: four
/// points is a diamond, three a triangle pointing up.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub radius: f32,
    pub point_count: u32,
    pub position: Vec2,
    pub fill: Color,
}

impl CircleShape {
    pub const DEFAULT_POINT_COUNT: u32 = 30;

    #[inline]
    pub fn new(radius: f32, point_count: u32) -> Self {
        Self {
            radius,
            point_count,
            position: Vec2::zero(),
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.radius)
    }

    /// Returns outline point `index`, starting at the top and going clockwise
    /// on screen.
    pub fn point(&self, index: u32) -> Vec2 {
        let angle = index as f32 * TAU / self.point_count.max(1) as f32 - TAU / 4.0;
        self.center() + Vec2::new(angle.cos(), angle.sin()) * self.radius
    }

    pub fn outline(&self) -> Vec<Vec2> {
        (0..self.point_count).map(|i| self.point(i)).collect()
    }
}

impl Default for CircleShape {
    fn default() -> Self {
        Self::new(0.0, Self::DEFAULT_POINT_COUNT)
    }
}
