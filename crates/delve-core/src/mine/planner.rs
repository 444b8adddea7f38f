//! Plan orchestration
//!
//! Sequences partitioning, the corner gradient, per-pair tunnel routing,
//! and the wall/door classification. `MinePlanner` suspends after each
//! phase so a caller can repaint between steps; [`plan_mine`] drains all
//! phases synchronously. Working arrays are allocated once per run and
//! overwritten across the room-pair passes.

use std::collections::HashSet;

use delve_rng::DigRng;
use serde::{Deserialize, Serialize};

use crate::consts::{FLOOR_WEIGHT, HUG_WEIGHT};

use super::config::{ConfigError, MineConfig};
use super::dijkstra::{dijkstra_distances, trace};
use super::geometry::{center_of, Point, Rect};
use super::gradient::breadth_first_distances;
use super::graph::TurnGraph;
use super::heap::IndexedHeap;
use super::partition::partition_rooms;
use super::space::Space;

/// Output record of one planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinePlan {
    /// Total cell count of the working rectangle
    pub area: usize,
    /// The shared point-to-index encoding
    pub space: Space,
    /// Placed rooms
    pub rooms: Vec<Rect>,
    /// One interior center per room, in room order
    pub centers: Vec<Point>,
    /// 0/1 per cell: dug floor (room interiors and tunnels)
    pub floors: Vec<u8>,
    /// 0/1 per cell: undug cell touching floor
    pub walls: Vec<u8>,
    /// 0/1 per cell: floor cell on some room's outer ring
    pub doors: Vec<u8>,
    /// Per-cell digging cost as of the last rebuild
    pub weights: Vec<f64>,
}

/// The phase a [`MinePlanner`] just completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStep {
    /// Rooms and centers are placed
    RoomsPlaced { count: usize },
    /// Corner gradient computed, room interiors marked floor
    GradientReady,
    /// One tunnel dug between the centers of rooms `from` and `to`
    TunnelDug { from: usize, to: usize },
    /// Walls and doors classified; the plan is complete
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Rooms,
    Gradient,
    Tunnels(usize),
    Classify,
    Done,
}

/// Stepwise planner: one phase per [`step`](Self::step) call.
///
/// Must be driven from a single caller; abandoning it early just
/// discards the partially dug state.
#[derive(Debug, Clone)]
pub struct MinePlanner {
    config: MineConfig,
    space: Space,
    rooms: Vec<Rect>,
    centers: Vec<Point>,
    /// Cyclically offset room pairs still to be tunneled
    pairs: Vec<(usize, usize)>,
    floors: Vec<u8>,
    walls: Vec<u8>,
    doors: Vec<u8>,
    weights: Vec<f64>,
    /// Gradient ring index per cell, -1 where unreached
    corner_distances: Vec<i32>,
    /// Shortest-path labels over both layers, `2 * area`
    distances: Vec<f64>,
    heap: IndexedHeap,
    stage: Stage,
}

impl MinePlanner {
    /// Validate the configuration and allocate all working arrays
    pub fn new(config: MineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = Space::new(config.bounds);
        let area = space.area();
        Ok(Self {
            config,
            space,
            rooms: Vec::new(),
            centers: Vec::new(),
            pairs: Vec::new(),
            floors: vec![0; area],
            walls: vec![0; area],
            doors: vec![0; area],
            weights: vec![0.0; area],
            corner_distances: vec![-1; area],
            distances: vec![f64::INFINITY; 2 * area],
            heap: IndexedHeap::new(2 * area),
            stage: Stage::Rooms,
        })
    }

    /// Advance one phase and suspend. Returns `Finished` on every call
    /// once the plan is complete.
    pub fn step(&mut self, rng: &mut DigRng) -> PlanStep {
        match self.stage {
            Stage::Rooms => {
                self.place_rooms(rng);
                self.stage = Stage::Gradient;
                PlanStep::RoomsPlaced {
                    count: self.rooms.len(),
                }
            }
            Stage::Gradient => {
                self.compute_gradient();
                self.mark_room_floors();
                // fewer than two rooms skips all pathfinding
                self.stage = if self.pairs.is_empty() {
                    Stage::Classify
                } else {
                    Stage::Tunnels(0)
                };
                PlanStep::GradientReady
            }
            Stage::Tunnels(k) => {
                let (from, to) = self.pairs[k];
                self.dig_tunnel(from, to, rng);
                self.stage = if k + 1 < self.pairs.len() {
                    Stage::Tunnels(k + 1)
                } else {
                    Stage::Classify
                };
                PlanStep::TunnelDug { from, to }
            }
            Stage::Classify => {
                self.classify();
                self.stage = Stage::Done;
                PlanStep::Finished
            }
            Stage::Done => PlanStep::Finished,
        }
    }

    /// Consume the planner into its output record
    pub fn into_plan(self) -> MinePlan {
        MinePlan {
            area: self.space.area(),
            space: self.space,
            rooms: self.rooms,
            centers: self.centers,
            floors: self.floors,
            walls: self.walls,
            doors: self.doors,
            weights: self.weights,
        }
    }

    fn place_rooms(&mut self, rng: &mut DigRng) {
        let span = self.config.max_rooms - self.config.min_rooms;
        let quota = self.config.min_rooms + rng.rn2(span + 1);

        // keep a one-cell margin for the outer walls
        let interior = self.config.bounds.inset();
        if interior.w > 0 && interior.h > 0 {
            self.rooms = partition_rooms(
                interior,
                quota,
                self.config.min_room_area,
                self.config.max_room_area,
                rng,
            );
        }
        self.centers = self
            .rooms
            .iter()
            .map(|room| center_of(room, rng))
            .collect();
        self.pairs = cyclic_pairs(self.rooms.len());
    }

    fn compute_gradient(&mut self) {
        let mut starts = Vec::with_capacity(self.rooms.len() * 4);
        for room in &self.rooms {
            for corner in room.outer_corners() {
                if let Some(i) = self.space.index(corner) {
                    starts.push(i);
                }
            }
        }
        self.corner_distances = breadth_first_distances(&self.space, &starts, -1);
    }

    fn mark_room_floors(&mut self) {
        for room in &self.rooms {
            for y in room.y..room.y + room.h {
                for x in room.x..room.x + room.w {
                    if let Some(i) = self.space.index(Point::new(x, y)) {
                        self.floors[i] = 1;
                    }
                }
            }
        }
    }

    fn dig_tunnel(&mut self, from: usize, to: usize, rng: &mut DigRng) {
        self.rebuild_weights();

        let area = self.space.area();
        let (Some(source), Some(target)) = (
            self.space.index(self.centers[from]),
            self.space.index(self.centers[to]),
        ) else {
            return;
        };

        let graph = TurnGraph::new(&self.space, &self.weights, self.config.turn_cost);
        // both layers of each endpoint: no artificial first or last turn
        dijkstra_distances(
            &graph,
            &[source, source + area],
            &mut self.distances,
            &mut self.heap,
        );
        let path = trace(&graph, &self.distances, &[target, target + area], rng);
        for node in path {
            self.floors[node % area] = 1;
        }
    }

    /// Rebuild the per-cell digging cost for the next room pair
    fn rebuild_weights(&mut self) {
        for i in 0..self.weights.len() {
            self.weights[i] = if self.floors[i] == 1 {
                FLOOR_WEIGHT
            } else if self.touches_floor(i) {
                // discourage new tunnels hugging existing walls
                HUG_WEIGHT
            } else {
                // most expensive near room corners; gradient values of 0
                // (corner cells) and -1 (unreached) clamp to 1
                self.config.dig_cost / self.corner_distances[i].max(1) as f64
            };
        }
        // tunnels must never attach at a room corner; a corner that is
        // already floor (an adjacent room's interior) stays passable
        for room in &self.rooms {
            for corner in room.outer_corners() {
                if let Some(i) = self.space.index(corner) {
                    if self.floors[i] == 0 {
                        self.weights[i] = f64::INFINITY;
                    }
                }
            }
        }
    }

    /// Does any rook neighbor of cell `i` hold floor?
    fn touches_floor(&self, i: usize) -> bool {
        let p = self.space.point(i);
        [
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
        ]
        .into_iter()
        .filter_map(|q| self.space.index(q))
        .any(|j| self.floors[j] == 1)
    }

    /// Derive walls and doors from the final floor layout
    fn classify(&mut self) {
        for i in 0..self.walls.len() {
            if self.floors[i] == 0 && self.touches_floor(i) {
                self.walls[i] = 1;
            }
        }
        for room in &self.rooms {
            for p in room.ring() {
                if let Some(i) = self.space.index(p) {
                    if self.floors[i] == 1 {
                        self.doors[i] = 1;
                    }
                }
            }
        }
    }
}

/// Room pairs in four cyclically offset phases: each room to its 1st,
/// 2nd, 3rd, and 4th successor around the room ring, unordered
/// duplicates skipped. Completeness of the resulting connectivity is a
/// per-configuration property, not an invariant.
fn cyclic_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    if n < 2 {
        return pairs;
    }
    let mut seen = HashSet::new();
    for offset in 1..=4usize {
        for i in 0..n {
            let j = (i + offset) % n;
            if i == j {
                continue;
            }
            if seen.insert((i.min(j), i.max(j))) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Plain variant: drain every phase synchronously and return the plan
pub fn plan_mine(config: MineConfig, rng: &mut DigRng) -> Result<MinePlan, ConfigError> {
    let mut planner = MinePlanner::new(config)?;
    while planner.step(rng) != PlanStep::Finished {}
    Ok(planner.into_plan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_pairs_two_rooms() {
        assert_eq!(cyclic_pairs(2), vec![(0, 1)]);
    }

    #[test]
    fn test_cyclic_pairs_cover_ring_neighbors() {
        let pairs = cyclic_pairs(6);
        // every adjacent ring pair appears, so the ring itself is covered
        for i in 0..6 {
            let j = (i + 1) % 6;
            let key = (i.min(j), i.max(j));
            assert!(
                pairs.iter().any(|&(a, b)| (a.min(b), a.max(b)) == key),
                "missing adjacent pair {key:?}"
            );
        }
        // no duplicates in either orientation
        let mut keys: Vec<_> = pairs.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), pairs.len());
    }

    #[test]
    fn test_cyclic_pairs_degenerate() {
        assert!(cyclic_pairs(0).is_empty());
        assert!(cyclic_pairs(1).is_empty());
    }

    #[test]
    fn test_stepwise_matches_plain() {
        let config = MineConfig::default();
        let mut rng1 = DigRng::new(99);
        let plain = plan_mine(config, &mut rng1).unwrap();

        let mut rng2 = DigRng::new(99);
        let mut planner = MinePlanner::new(config).unwrap();
        let mut steps = 0;
        while planner.step(&mut rng2) != PlanStep::Finished {
            steps += 1;
        }
        let stepped = planner.into_plan();

        assert!(steps >= 2, "expected at least rooms and gradient phases");
        assert_eq!(plain, stepped);
    }

    #[test]
    fn test_step_after_finish_stays_finished() {
        let mut rng = DigRng::new(3);
        let mut planner = MinePlanner::new(MineConfig::default()).unwrap();
        while planner.step(&mut rng) != PlanStep::Finished {}
        assert_eq!(planner.step(&mut rng), PlanStep::Finished);
        assert_eq!(planner.step(&mut rng), PlanStep::Finished);
    }

    #[test]
    fn test_single_room_skips_tunnels() {
        let config = MineConfig {
            bounds: Rect::new(0, 0, 10, 10),
            min_rooms: 1,
            max_rooms: 1,
            min_room_area: 9,
            max_room_area: 50,
            ..Default::default()
        };
        let mut rng = DigRng::new(5);
        let mut planner = MinePlanner::new(config).unwrap();
        loop {
            let step = planner.step(&mut rng);
            assert!(
                !matches!(step, PlanStep::TunnelDug { .. }),
                "single room must not dig tunnels"
            );
            if step == PlanStep::Finished {
                break;
            }
        }
        let plan = planner.into_plan();
        assert_eq!(plan.rooms.len(), 1);
        // floor is exactly the room interior
        let floor_count: u32 = plan.floors.iter().map(|&f| f as u32).sum();
        assert_eq!(floor_count, plan.rooms[0].area() as u32);
    }

    #[test]
    fn test_zero_rooms_yields_empty_plan() {
        let config = MineConfig {
            min_rooms: 0,
            max_rooms: 0,
            ..Default::default()
        };
        let mut rng = DigRng::new(11);
        let plan = plan_mine(config, &mut rng).unwrap();
        assert!(plan.rooms.is_empty());
        assert!(plan.floors.iter().all(|&f| f == 0));
        assert!(plan.walls.iter().all(|&w| w == 0));
        assert!(plan.doors.iter().all(|&d| d == 0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MineConfig {
            min_rooms: 9,
            max_rooms: 2,
            ..Default::default()
        };
        assert!(MinePlanner::new(config).is_err());
    }
}
