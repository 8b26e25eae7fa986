//! Screen-space rectangles.
//!
//! All game logic runs in *screen space*: integer pixels, origin at the
//! top-left corner, y growing downward.  Only [`crate::graphics`] converts to
//! Bevy's centred, y-up world space when placing sprites.

use bevy::math::{IRect, IVec2, Vec2};

/// Axis-aligned integer rectangle in screen space.
///
/// `right` and `bottom` are exclusive edges (`x + width`, `y + height`), so
/// two rectangles that merely share an edge do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Move horizontally so the centre lands on `cx`.
    #[inline]
    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - self.width / 2;
    }

    /// Move vertically so the bottom edge lands on `bottom`.
    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Exact centre as floats (used when placing sprites).
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn to_irect(self) -> IRect {
        IRect::from_corners(
            IVec2::new(self.left(), self.top()),
            IVec2::new(self.right(), self.bottom()),
        )
    }

    /// `true` when the two rectangles share a non-zero area.
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        !self.to_irect().intersect(other.to_irect()).is_empty()
    }

    /// `true` when `point` lies inside; the left/top edges are inclusive and
    /// the right/bottom edges exclusive.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left() as f32
            && point.x < self.right() as f32
            && point.y >= self.top() as f32
            && point.y < self.bottom() as f32
    }
}

/// Anything that occupies a screen-space rectangle.
///
/// Implemented by the ship, bullet, and alien components so a single generic
/// system can place every sprite.
pub trait Body {
    fn rect(&self) -> ScreenRect;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_position_and_size() {
        let r = ScreenRect::new(10, 20, 30, 40);
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 60));
        assert_eq!(r.center_x(), 25);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = ScreenRect::new(0, 0, 10, 10);
        let b = ScreenRect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        let c = ScreenRect::new(9, 9, 10, 10);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = ScreenRect::new(0, 0, 100, 100);
        let inner = ScreenRect::new(40, 40, 3, 15);
        assert!(outer.intersects(&inner));
    }

    #[test]
    fn point_test_is_half_open() {
        let r = ScreenRect::new(0, 0, 10, 10);
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(r.contains_point(Vec2::new(9.5, 9.5)));
        assert!(!r.contains_point(Vec2::new(10.0, 5.0)));
        assert!(!r.contains_point(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn set_center_and_bottom_move_the_rect() {
        let mut r = ScreenRect::new(0, 0, 60, 48);
        r.set_center_x(600);
        r.set_bottom(800);
        assert_eq!(r.x, 570);
        assert_eq!(r.bottom(), 800);
    }
}
