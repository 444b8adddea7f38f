//! Recursive room partitioning
//!
//! Splits the working rectangle into disjoint strips until a room quota
//! is spent, placing one room per terminal leaf. Each recursion works in
//! local coordinates and carries an explicit affine transform back to the
//! global rectangle, so taller-than-wide regions can be transposed and
//! strips mirrored without nested closure chains.

use delve_rng::DigRng;
use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// Integer affine transform (2x2 matrix plus offset) composed during the
/// partition recursion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
    tx: i32,
    ty: i32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        xx: 1,
        xy: 0,
        yx: 0,
        yy: 1,
        tx: 0,
        ty: 0,
    };

    /// Shift by (dx, dy)
    pub fn translate(dx: i32, dy: i32) -> Self {
        Transform {
            tx: dx,
            ty: dy,
            ..Self::IDENTITY
        }
    }

    /// Swap the axes: (x, y) -> (y, x)
    pub fn transpose() -> Self {
        Transform {
            xx: 0,
            xy: 1,
            yx: 1,
            yy: 0,
            tx: 0,
            ty: 0,
        }
    }

    /// Mirror horizontally within a strip of the given width:
    /// x -> width - 1 - x
    pub fn flip_x(width: i32) -> Self {
        Transform {
            xx: -1,
            tx: width - 1,
            ..Self::IDENTITY
        }
    }

    /// Apply to a point
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.xx * p.x + self.xy * p.y + self.tx,
            self.yx * p.x + self.yy * p.y + self.ty,
        )
    }

    /// Compose: `a.then(b).apply(p) == b.apply(a.apply(p))`
    pub fn then(&self, next: Transform) -> Transform {
        Transform {
            xx: next.xx * self.xx + next.xy * self.yx,
            xy: next.xx * self.xy + next.xy * self.yy,
            yx: next.yx * self.xx + next.yy * self.yx,
            yy: next.yx * self.xy + next.yy * self.yy,
            tx: next.xx * self.tx + next.xy * self.ty + next.tx,
            ty: next.yx * self.tx + next.yy * self.ty + next.ty,
        }
    }
}

/// Partition `rect` into up to `quota` rooms with areas in
/// `[min_area, max_area]`.
///
/// Returned rooms are pairwise disjoint and lie inside `rect`; a leaf too
/// small for `min_area` contributes nothing.
pub fn partition_rooms(
    rect: Rect,
    quota: u32,
    min_area: i32,
    max_area: i32,
    rng: &mut DigRng,
) -> Vec<Rect> {
    let mut splitter = Splitter {
        min_area,
        max_area,
        rng,
        rooms: Vec::new(),
    };
    splitter.split(
        rect.w,
        rect.h,
        quota,
        Transform::translate(rect.x, rect.y),
    );
    splitter.rooms
}

struct Splitter<'a> {
    min_area: i32,
    max_area: i32,
    rng: &'a mut DigRng,
    rooms: Vec<Rect>,
}

impl Splitter<'_> {
    /// Recurse over a `w` x `h` local region whose points map to global
    /// coordinates through `to_global`
    fn split(&mut self, w: i32, h: i32, quota: u32, to_global: Transform) {
        if quota == 0 || w <= 0 || h <= 0 || w * h < self.min_area {
            return;
        }

        // Work on the wide axis so split orientation alternates naturally
        if h > w {
            self.split(h, w, quota, Transform::transpose().then(to_global));
            return;
        }

        // Narrowest strip that can still hold a minimum-area room
        let min_w = (self.min_area + h - 1) / h;

        if quota > 1 && w >= 2 * min_w {
            let s = min_w + self.rng.rn2((w - 2 * min_w + 1) as u32) as i32;

            // Quota proportional to strip width, coin flip at exact halves
            let num = quota as i64 * s as i64;
            let den = w as i64;
            let mut share = (num / den) as u32;
            let rem = (num % den) * 2;
            if rem > den || (rem == den && self.rng.coin()) {
                share += 1;
            }
            let left_quota = share.clamp(1, quota - 1);
            let right_quota = quota - left_quota;

            let left = self.maybe_flip(s, to_global);
            let right = self.maybe_flip(w - s, Transform::translate(s, 0).then(to_global));
            self.split(s, h, left_quota, left);
            self.split(w - s, h, right_quota, right);
            return;
        }

        self.place_leaf(w, h, to_global);
    }

    /// Coin-flip mirroring of a strip so neither edge accumulates a
    /// placement bias
    fn maybe_flip(&mut self, width: i32, to_global: Transform) -> Transform {
        if self.rng.coin() {
            Transform::flip_x(width).then(to_global)
        } else {
            to_global
        }
    }

    /// Place one room inside a terminal leaf
    fn place_leaf(&mut self, w: i32, h: i32, to_global: Transform) {
        let capacity = w * h;
        let hi = self.max_area.min(capacity);
        let lo = self.min_area;
        let target = lo + self.rng.rn2((hi - lo + 1) as u32) as i32;
        let aspect = 0.5 + self.rng.unit(); // [0.5, 1.5)

        // Aspect and target area steer the dimensions; the width pick keeps
        // the realized area inside [min_area, max_area] whenever the leaf
        // can represent it (min bound wins if no width can)
        let ideal = (target as f64 * aspect).sqrt().round() as i32;
        let rw = self.pick_width(ideal, w, h);
        let rh_lo = (lo + rw - 1) / rw;
        let rh_hi = h.min(self.max_area / rw).max(rh_lo);
        let rh = ((target as f64 / rw as f64).round() as i32).clamp(rh_lo, rh_hi);

        // Random offset within the remaining slack
        let ox = self.rng.rn2((w - rw + 1) as u32) as i32;
        let oy = self.rng.rn2((h - rh + 1) as u32) as i32;

        // The transform may flip or transpose the corners out of order
        let a = to_global.apply(Point::new(ox, oy));
        let b = to_global.apply(Point::new(ox + rw - 1, oy + rh - 1));
        self.rooms.push(Rect::from_corners(a, b));
    }

    /// Width closest to `ideal` whose forced minimum height keeps the
    /// area at or under `max_area`. A wide room must be at least
    /// `ceil(min_area / rw)` tall, so an unconstrained width can drag the
    /// area over the cap; widths where that happens are skipped. When no
    /// width in the leaf avoids it the min-area rail wins.
    fn pick_width(&self, ideal: i32, w: i32, h: i32) -> i32 {
        let lo = self.min_area;
        let rw_lo = ((lo + h - 1) / h).max(1);
        let rw_hi = w.min(self.max_area);
        let mut best: Option<i32> = None;
        for rw in rw_lo..=rw_hi {
            let rh_lo = (lo + rw - 1) / rw;
            if rw * rh_lo > self.max_area {
                continue;
            }
            match best {
                Some(b) if (rw - ideal).abs() >= (b - ideal).abs() => {}
                _ => best = Some(rw),
            }
        }
        best.unwrap_or_else(|| ideal.clamp(rw_lo, rw_hi))
    }
}
