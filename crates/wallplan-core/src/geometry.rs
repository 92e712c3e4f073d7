#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values share one linear unit (millimeters on the wall). Nothing here
//! rounds: snap decisions downstream compare against tolerances as small as
//! a tenth of a millimeter.

use serde::{Deserialize, Serialize};

/// A point on the wall, measured from the wall's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Distance from the left edge of the wall.
    pub x: f64,
    /// Distance from the top edge of the wall.
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this position by a delta.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: Position) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Width and height of a frame or the wall itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either side has no extent.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Derived edge and center coordinates of a rectangle.
///
/// Always computed on demand from a position and dimensions; never stored
/// alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub center_x: f64,
    pub center_y: f64,
}

/// Compute the edges of the rectangle at `position` with `dimensions`.
#[inline]
pub fn edges_of(position: Position, dimensions: Dimensions) -> Edges {
    Edges {
        left: position.x,
        right: position.x + dimensions.width,
        top: position.y,
        bottom: position.y + dimensions.height,
        center_x: position.x + dimensions.width / 2.0,
        center_y: position.y + dimensions.height / 2.0,
    }
}

/// Test whether the half-open intervals `[a_start, a_end)` and
/// `[b_start, b_end)` share any extent.
///
/// Touching intervals (`a_end == b_start`) do not overlap.
#[inline]
pub fn intervals_overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

/// A positioned rectangle on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub position: Position,
    pub dimensions: Dimensions,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Position::new(x, y),
            dimensions: Dimensions::new(width, height),
        }
    }

    /// Create a rectangle anchored at the origin with the given size.
    #[inline]
    pub const fn from_dimensions(dimensions: Dimensions) -> Self {
        Self {
            position: Position::new(0.0, 0.0),
            dimensions,
        }
    }

    /// Edges and centers of this rectangle.
    #[inline]
    pub fn edges(&self) -> Edges {
        edges_of(self.position, self.dimensions)
    }

    /// The same rectangle moved to `position`.
    #[inline]
    #[must_use]
    pub fn moved_to(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Position) -> bool {
        let e = self.edges();
        point.x >= e.left && point.x < e.right && point.y >= e.top && point.y < e.bottom
    }

    /// Check if this rectangle shares any area with another.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a = self.edges();
        let b = other.edges();
        intervals_overlap(a.left, a.right, b.left, b.right)
            && intervals_overlap(a.top, a.bottom, b.top, b.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_exact() {
        let e = edges_of(Position::new(1400.0, 500.0), Dimensions::new(200.0, 100.0));
        assert_eq!(e.left, 1400.0);
        assert_eq!(e.right, 1600.0);
        assert_eq!(e.top, 500.0);
        assert_eq!(e.bottom, 600.0);
        assert_eq!(e.center_x, 1500.0);
        assert_eq!(e.center_y, 550.0);
    }

    #[test]
    fn edges_of_odd_width_keep_fraction() {
        let e = edges_of(Position::new(0.0, 0.0), Dimensions::new(101.0, 3.0));
        assert_eq!(e.center_x, 50.5);
        assert_eq!(e.center_y, 1.5);
    }

    #[test]
    fn overlap_is_strict() {
        assert!(intervals_overlap(0.0, 10.0, 5.0, 15.0));
        assert!(intervals_overlap(5.0, 15.0, 0.0, 10.0));
        assert!(!intervals_overlap(0.0, 10.0, 10.0, 20.0));
        assert!(!intervals_overlap(10.0, 20.0, 0.0, 10.0));
        assert!(!intervals_overlap(0.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn overlap_contained_interval() {
        assert!(intervals_overlap(0.0, 100.0, 40.0, 60.0));
        assert!(intervals_overlap(40.0, 60.0, 0.0, 100.0));
    }

    #[test]
    fn zero_length_interval_never_overlaps() {
        assert!(!intervals_overlap(5.0, 5.0, 0.0, 10.0));
    }

    #[test]
    fn rect_overlaps_needs_both_axes() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.overlaps(&Rect::new(50.0, 50.0, 100.0, 100.0)));
        assert!(!a.overlaps(&Rect::new(50.0, 100.0, 100.0, 100.0)));
        assert!(!a.overlaps(&Rect::new(100.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(r.contains(Position::new(10.0, 10.0)));
        assert!(r.contains(Position::new(19.9, 19.9)));
        assert!(!r.contains(Position::new(20.0, 15.0)));
    }

    #[test]
    fn moved_to_keeps_dimensions() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).moved_to(Position::new(5.0, 6.0));
        assert_eq!(r, Rect::new(5.0, 6.0, 3.0, 4.0));
    }

    #[test]
    fn empty_dimensions() {
        assert!(Dimensions::new(0.0, 10.0).is_empty());
        assert!(Dimensions::new(10.0, 0.0).is_empty());
        assert!(!Dimensions::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn position_offset() {
        let p = Position::new(10.0, 20.0).offset(Position::new(-5.0, 2.5));
        assert_eq!(p, Position::new(5.0, 22.5));
    }
}
