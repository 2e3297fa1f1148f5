//! Axis-aligned platform geometry
//!
//! A platform is one horizontal slice of the tower:
//! - x1, x2: Left and Right borders
//! - y1, y2: Front and Back borders
//!
//! Borders are not validated. A clip that does not overlap yields a platform
//! with non-positive width or height, which callers treat as a miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::side::Side;

/// An axis-aligned rectangle in the horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Left border
    pub x1: f32,
    /// Right border
    pub x2: f32,
    /// Front border
    pub y1: f32,
    /// Back border
    pub y2: f32,
}

impl Platform {
    pub fn new(x1: f32, x2: f32, y1: f32, y2: f32) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Platform of the given size centered at `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            x1: center.x - width / 2.0,
            x2: center.x + width / 2.0,
            y1: center.y - height / 2.0,
            y2: center.y + height / 2.0,
        }
    }

    /// Extent along X
    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Extent along Y
    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.x1 + self.x2) / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.y1 + self.y2) / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Extent along the axis bounded by `side`
    pub fn extent(&self, side: Side) -> f32 {
        match side {
            Side::Front | Side::Back => self.height(),
            Side::Left | Side::Right => self.width(),
        }
    }

    /// Center coordinate on the axis bounded by `side`
    pub fn center_on(&self, side: Side) -> f32 {
        match side {
            Side::Front | Side::Back => self.center_y(),
            Side::Left | Side::Right => self.center_x(),
        }
    }

    /// True if the rectangle has no area (a clip that missed)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// The part of `block` that stays on top of this platform
    pub fn intersect(&self, block: &Platform) -> Platform {
        Platform {
            x1: self.x1.max(block.x1),
            x2: self.x2.min(block.x2),
            y1: self.y1.max(block.y1),
            y2: self.y2.min(block.y2),
        }
    }

    /// Border coordinate at the given side
    pub fn position(&self, side: Side) -> f32 {
        match side {
            Side::Front => self.y1,
            Side::Back => self.y2,
            Side::Left => self.x1,
            Side::Right => self.x2,
        }
    }

    /// Replace the border coordinate at the given side
    pub fn set_position(&mut self, side: Side, position: f32) {
        match side {
            Side::Front => self.y1 = position,
            Side::Back => self.y2 = position,
            Side::Left => self.x1 = position,
            Side::Right => self.x2 = position,
        }
    }

    /// Move the border at the given side by `delta`
    pub fn inc_position(&mut self, side: Side, delta: f32) {
        self.set_position(side, self.position(side) + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let p = Platform::new(-3.0, 3.0, -1.0, 2.0);
        assert_eq!(p.width(), 6.0);
        assert_eq!(p.height(), 3.0);
        assert_eq!(p.center(), Vec2::new(0.0, 0.5));
        assert_eq!(p.extent(Side::Back), 3.0);
        assert_eq!(p.extent(Side::Left), 6.0);
    }

    #[test]
    fn test_intersect_partial_overlap() {
        let top = Platform::new(-3.0, 3.0, -3.0, 3.0);
        let block = Platform::new(-3.0, 3.0, -1.0, 5.0);
        let m = top.intersect(&block);
        assert_eq!(m, Platform::new(-3.0, 3.0, -1.0, 3.0));
        assert!(!m.is_degenerate());
    }

    #[test]
    fn test_intersect_disjoint_is_degenerate() {
        let top = Platform::new(-3.0, 3.0, -3.0, 3.0);
        let block = Platform::new(-3.0, 3.0, 4.0, 10.0);
        let m = top.intersect(&block);
        assert!(m.height() < 0.0);
        assert!(m.is_degenerate());

        // Touching edges leave zero area
        let block = Platform::new(3.0, 9.0, -3.0, 3.0);
        assert!(top.intersect(&block).is_degenerate());
    }

    #[test]
    fn test_position_addresses_each_border() {
        let mut p = Platform::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.position(Side::Left), 1.0);
        assert_eq!(p.position(Side::Right), 2.0);
        assert_eq!(p.position(Side::Front), 3.0);
        assert_eq!(p.position(Side::Back), 4.0);

        p.set_position(Side::Back, 6.0);
        p.inc_position(Side::Left, -0.5);
        assert_eq!(p, Platform::new(0.5, 2.0, 3.0, 6.0));
    }

    #[test]
    fn test_from_center() {
        let p = Platform::from_center(Vec2::new(1.0, -1.0), 4.0, 2.0);
        assert_eq!(p, Platform::new(-1.0, 3.0, -2.0, 0.0));
    }
}
