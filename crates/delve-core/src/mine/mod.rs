//! Mine planning
//!
//! Room partitioning, tunnel routing, and the per-cell plan arrays.

mod config;
mod dijkstra;
mod geometry;
mod gradient;
mod graph;
mod heap;
mod partition;
mod planner;
mod space;

pub use config::{ConfigError, MineConfig};
pub use dijkstra::{dijkstra_distances, trace};
pub use geometry::{center_of, half_round, Point, Rect};
pub use gradient::breadth_first_distances;
pub use graph::TurnGraph;
pub use heap::IndexedHeap;
pub use partition::{partition_rooms, Transform};
pub use planner::{plan_mine, MinePlan, MinePlanner, PlanStep};
pub use space::Space;
