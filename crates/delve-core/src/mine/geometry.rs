//! Rectangle and point helpers for room placement
//!
//! Integer grid geometry: insetting, corner enumeration, the one-cell
//! perimeter ring outside a rectangle, and canonicalization of two
//! opposite corners into a rectangle.

use delve_rng::DigRng;
use serde::{Deserialize, Serialize};

/// An integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned integer rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width in cells
    pub w: i32,
    /// Height in cells
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Canonical rectangle spanning two opposite corners, regardless of
    /// which corners are given or in what order
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            w: (a.x - b.x).abs() + 1,
            h: (a.y - b.y).abs() + 1,
        }
    }

    /// Area in cells
    pub fn area(&self) -> i32 {
        self.w * self.h
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Check if this rectangle fully contains another
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }

    /// Check if this rectangle intersects another
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x + self.w <= other.x
            || other.x + other.w <= self.x
            || self.y + self.h <= other.y
            || other.y + other.h <= self.y)
    }

    /// Shrink by one cell on each side, keeping a border margin
    pub fn inset(&self) -> Rect {
        Rect {
            x: self.x + 1,
            y: self.y + 1,
            w: self.w - 2,
            h: self.h - 2,
        }
    }

    /// The rectangle's own four corner cells
    pub fn inner_corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.w - 1, self.y),
            Point::new(self.x, self.y + self.h - 1),
            Point::new(self.x + self.w - 1, self.y + self.h - 1),
        ]
    }

    /// The four corner cells of the one-cell frame around the rectangle,
    /// diagonal to the inner corners
    pub fn outer_corners(&self) -> [Point; 4] {
        [
            Point::new(self.x - 1, self.y - 1),
            Point::new(self.x + self.w, self.y - 1),
            Point::new(self.x - 1, self.y + self.h),
            Point::new(self.x + self.w, self.y + self.h),
        ]
    }

    /// The full perimeter ring one cell outside the rectangle, corners
    /// included. Tunnels abutting a room surface in this ring.
    pub fn ring(&self) -> impl Iterator<Item = Point> + '_ {
        let top = (self.x - 1..=self.x + self.w).map(move |x| Point::new(x, self.y - 1));
        let bottom = (self.x - 1..=self.x + self.w).map(move |x| Point::new(x, self.y + self.h));
        let left = (self.y..self.y + self.h).map(move |y| Point::new(self.x - 1, y));
        let right = (self.y..self.y + self.h).map(move |y| Point::new(self.x + self.w, y));
        top.chain(bottom).chain(left).chain(right)
    }
}

/// Half of `n`, randomly rounding odd values up or down so repeated
/// centering does not drift toward one corner
pub fn half_round(n: i32, rng: &mut DigRng) -> i32 {
    if n % 2 == 0 {
        n / 2
    } else {
        n / 2 + rng.rn2(2) as i32
    }
}

/// Pick a point inside a rectangle biased toward the middle
pub fn center_of(rect: &Rect, rng: &mut DigRng) -> Point {
    Point::new(
        rect.x + half_round(rect.w - 1, rng),
        rect.y + half_round(rect.h - 1, rng),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_any_orientation() {
        let expected = Rect::new(2, 3, 4, 5);
        let a = Point::new(2, 3);
        let b = Point::new(5, 7);
        assert_eq!(Rect::from_corners(a, b), expected);
        assert_eq!(Rect::from_corners(b, a), expected);
        assert_eq!(
            Rect::from_corners(Point::new(5, 3), Point::new(2, 7)),
            expected
        );
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(0, 0, 10, 10).inset();
        assert_eq!(r, Rect::new(1, 1, 8, 8));
    }

    #[test]
    fn test_corners() {
        let r = Rect::new(2, 2, 3, 2);
        assert_eq!(
            r.inner_corners(),
            [
                Point::new(2, 2),
                Point::new(4, 2),
                Point::new(2, 3),
                Point::new(4, 3)
            ]
        );
        assert_eq!(
            r.outer_corners(),
            [
                Point::new(1, 1),
                Point::new(5, 1),
                Point::new(1, 4),
                Point::new(5, 4)
            ]
        );
    }

    #[test]
    fn test_ring_is_exact_perimeter() {
        let r = Rect::new(3, 3, 4, 3);
        let ring: Vec<Point> = r.ring().collect();
        // (w+2)*2 + h*2 cells, no duplicates
        assert_eq!(ring.len(), ((r.w + 2) * 2 + r.h * 2) as usize);
        let mut dedup = ring.clone();
        dedup.sort_by_key(|p| (p.x, p.y));
        dedup.dedup();
        assert_eq!(dedup.len(), ring.len());
        // every ring cell touches the rect but is not inside it
        for p in &ring {
            assert!(!r.contains(*p));
            assert!(p.x >= r.x - 1 && p.x <= r.x + r.w);
            assert!(p.y >= r.y - 1 && p.y <= r.y + r.h);
        }
    }

    #[test]
    fn test_half_round() {
        let mut rng = DigRng::new(42);
        assert_eq!(half_round(8, &mut rng), 4);
        for _ in 0..100 {
            let v = half_round(7, &mut rng);
            assert!(v == 3 || v == 4);
        }
    }

    #[test]
    fn test_center_of_stays_inside() {
        let mut rng = DigRng::new(42);
        let r = Rect::new(5, 5, 4, 3);
        for _ in 0..200 {
            assert!(r.contains(center_of(&r, &mut rng)));
        }
    }
}
