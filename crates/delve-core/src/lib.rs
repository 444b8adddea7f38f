//! delve-core: mine-planning engine
//!
//! Carves a rectangular bounding area into non-overlapping rooms by
//! recursive partitioning, then digs tunnels between room centers with a
//! turn-aware shortest-path search. The output is a flat per-cell
//! classification (floor / wall / door) plus the room list.
//!
//! The crate is pure logic with no I/O: a plan is a deterministic function
//! of its [`MineConfig`] and the seed of the injected [`DigRng`].

pub mod mine;

mod consts;

pub use consts::*;
pub use delve_rng::DigRng;
pub use mine::{
    plan_mine, ConfigError, MineConfig, MinePlan, MinePlanner, PlanStep, Point, Rect, Space,
};
