//! Shortest-path relaxation and backtrace
//!
//! Label-setting Dijkstra over the doubled tunnel graph using the
//! indexed heap, followed by a greedy walk from the target back toward
//! distance zero. The backtrace assumes a completed relaxation pass over
//! the same distances array.

use delve_rng::DigRng;

use crate::consts::TRACE_BUDGET_FACTOR;

use super::graph::TurnGraph;
use super::heap::IndexedHeap;

/// Relax `distances` from all `starts` (distance 0) until the frontier
/// is exhausted.
///
/// Passing both layer nodes of a source cell makes leaving the source in
/// either axis free of a first-turn charge.
pub fn dijkstra_distances(
    graph: &TurnGraph<'_>,
    starts: &[usize],
    distances: &mut [f64],
    heap: &mut IndexedHeap,
) {
    let n = graph.node_count();
    debug_assert_eq!(distances.len(), n);

    for d in distances.iter_mut() {
        *d = f64::INFINITY;
    }
    heap.reset(n);
    for &start in starts {
        distances[start] = 0.0;
        heap.decrease(distances, start);
    }

    let mut neighbors = Vec::with_capacity(3);
    while let Some(node) = heap.pop_min(distances) {
        let d = distances[node];
        if d.is_infinite() {
            // only unreachable nodes remain
            break;
        }
        graph.neighbors(node, &mut neighbors);
        for &next in &neighbors {
            let candidate = d + graph.weight(node, next);
            if candidate < distances[next] {
                distances[next] = candidate;
                heap.decrease(distances, next);
            }
        }
    }
}

/// Walk from the best of `ends` down the distance field to a zero node,
/// yielding every visited node (the caller maps nodes to cells via
/// `% area`).
///
/// Ties among minimal-distance ends are broken uniformly at random.
/// Returns an empty path when every end is unreachable; a step budget
/// bounds the walk against malformed distance fields.
pub fn trace(
    graph: &TurnGraph<'_>,
    distances: &[f64],
    ends: &[usize],
    rng: &mut DigRng,
) -> Vec<usize> {
    let mut best = f64::INFINITY;
    for &end in ends {
        if distances[end] < best {
            best = distances[end];
        }
    }
    if best.is_infinite() {
        return Vec::new();
    }

    let candidates: Vec<usize> = ends
        .iter()
        .copied()
        .filter(|&end| distances[end] == best)
        .collect();
    let Some(&start) = rng.choose(&candidates) else {
        return Vec::new();
    };

    let mut node = start;
    let mut path = vec![node];
    let mut neighbors = Vec::with_capacity(3);
    let budget = TRACE_BUDGET_FACTOR * graph.node_count();

    for _ in 0..budget {
        if distances[node] == 0.0 {
            break;
        }
        graph.neighbors(node, &mut neighbors);
        let mut next = node;
        let mut next_distance = distances[node];
        for &candidate in &neighbors {
            if distances[candidate] < next_distance {
                next_distance = distances[candidate];
                next = candidate;
            }
        }
        if next == node || next_distance.is_infinite() {
            // no downhill step exists; distances were not fully relaxed
            break;
        }
        node = next;
        path.push(node);
    }

    path
}
