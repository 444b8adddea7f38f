//! Doubled-layer tunnel graph
//!
//! Each cell appears twice: node `i < area` moves horizontally, node
//! `i + area` moves vertically. Crossing between the layers of one cell
//! is the only way to change axis, so an edge between layers carries the
//! turn cost and every 90-degree turn is paid exactly once, no matter
//! how many straight steps surround it.

use super::geometry::Point;
use super::space::Space;

/// Grid graph over `2 * area` nodes with per-cell terrain weights and a
/// fixed layer-crossing (turn) cost
pub struct TurnGraph<'a> {
    space: &'a Space,
    /// Current per-cell digging cost, length `area`
    weights: &'a [f64],
    turn_cost: f64,
}

impl<'a> TurnGraph<'a> {
    pub fn new(space: &'a Space, weights: &'a [f64], turn_cost: f64) -> Self {
        debug_assert_eq!(weights.len(), space.area());
        Self {
            space,
            weights,
            turn_cost,
        }
    }

    /// Total node count (both layers)
    pub fn node_count(&self) -> usize {
        2 * self.space.area()
    }

    /// Collect the neighbors of a node into `out`: the same-cell layer
    /// twin plus the in-layer moves, with out-of-bounds targets omitted
    pub fn neighbors(&self, node: usize, out: &mut Vec<usize>) {
        out.clear();
        let area = self.space.area();
        let vertical = node >= area;
        let cell = if vertical { node - area } else { node };
        let p = self.space.point(cell);

        if vertical {
            out.push(cell);
            if let Some(j) = self.space.index(Point::new(p.x, p.y - 1)) {
                out.push(j + area);
            }
            if let Some(j) = self.space.index(Point::new(p.x, p.y + 1)) {
                out.push(j + area);
            }
        } else {
            out.push(cell + area);
            if let Some(j) = self.space.index(Point::new(p.x - 1, p.y)) {
                out.push(j);
            }
            if let Some(j) = self.space.index(Point::new(p.x + 1, p.y)) {
                out.push(j);
            }
        }
    }

    /// Edge weight: the turn cost across layers, otherwise the
    /// destination cell's terrain weight
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        let area = self.space.area();
        if (from < area) != (to < area) {
            self.turn_cost
        } else {
            self.weights[to % area]
        }
    }
}
