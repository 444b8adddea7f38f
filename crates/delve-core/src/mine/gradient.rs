//! Corner-distance gradient field
//!
//! Multi-source breadth-first flood fill over rook moves. Every start
//! cell is stamped 0, each ring outward one more; unreached cells keep
//! the caller's default. The planner seeds it with all room outer
//! corners and divides the dig cost by the result, making near-corner
//! cells the most expensive to tunnel through.

use std::collections::VecDeque;

use super::geometry::Point;
use super::space::Space;

/// Ring distances from `starts` (flat cell indices) over the plain
/// four-neighbor relation
pub fn breadth_first_distances(space: &Space, starts: &[usize], default: i32) -> Vec<i32> {
    let area = space.area();
    let mut distances = vec![default; area];
    let mut seen = vec![false; area];
    let mut queue = VecDeque::new();

    for &start in starts {
        if start < area && !seen[start] {
            seen[start] = true;
            distances[start] = 0;
            queue.push_back(start);
        }
    }

    while let Some(cell) = queue.pop_front() {
        let next = distances[cell] + 1;
        let p = space.point(cell);
        let neighbors = [
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
        ];
        for q in neighbors {
            if let Some(j) = space.index(q) {
                if !seen[j] {
                    seen[j] = true;
                    distances[j] = next;
                    queue.push_back(j);
                }
            }
        }
    }

    distances
}
