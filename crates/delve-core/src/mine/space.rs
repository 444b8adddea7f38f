//! Point to flat-index mapping
//!
//! All plan arrays share one row-major encoding of the working rectangle;
//! `Space` is the single authority for it.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// Immutable bijection between points in a bounded rectangle and flat
/// cell indices `0..area`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    bounds: Rect,
}

impl Space {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        (self.bounds.w * self.bounds.h).max(0) as usize
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of a point, or None for points outside the bounds
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(((p.y - self.bounds.y) * self.bounds.w + (p.x - self.bounds.x)) as usize)
    }

    /// Inverse of [`index`](Self::index) for valid indices
    pub fn point(&self, index: usize) -> Point {
        let i = index as i32;
        Point::new(
            self.bounds.x + i % self.bounds.w,
            self.bounds.y + i / self.bounds.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let space = Space::new(Rect::new(2, 3, 5, 4));
        for i in 0..space.area() {
            assert_eq!(space.index(space.point(i)), Some(i));
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let space = Space::new(Rect::new(0, 0, 5, 4));
        assert_eq!(space.index(Point::new(-1, 0)), None);
        assert_eq!(space.index(Point::new(5, 0)), None);
        assert_eq!(space.index(Point::new(0, 4)), None);
        assert_eq!(space.index(Point::new(4, 3)), Some(19));
    }

    #[test]
    fn test_equality_follows_bounds() {
        let a = Space::new(Rect::new(0, 0, 5, 4));
        let b = Space::new(Rect::new(0, 0, 5, 4));
        let c = Space::new(Rect::new(1, 0, 5, 4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_row_major_order() {
        let space = Space::new(Rect::new(0, 0, 3, 2));
        assert_eq!(space.index(Point::new(0, 0)), Some(0));
        assert_eq!(space.index(Point::new(2, 0)), Some(2));
        assert_eq!(space.index(Point::new(0, 1)), Some(3));
    }
}
