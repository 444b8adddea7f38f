//! Planner constants
//!
//! Default configuration values and the fixed weights used while digging.

/// Default bounding rectangle dimensions
pub const DEFAULT_WIDTH: i32 = 48;
pub const DEFAULT_HEIGHT: i32 = 32;

/// Default room count range
pub const DEFAULT_MIN_ROOMS: u32 = 4;
pub const DEFAULT_MAX_ROOMS: u32 = 9;

/// Default room area range (cells)
pub const DEFAULT_MIN_ROOM_AREA: i32 = 9;
pub const DEFAULT_MAX_ROOM_AREA: i32 = 60;

/// Default base cost of digging one undug cell
pub const DEFAULT_DIG_COST: f64 = 24.0;

/// Default cost of a single 90-degree turn while digging
pub const DEFAULT_TURN_COST: f64 = 12.0;

/// Cost of moving through a cell that is already floor
pub const FLOOR_WEIGHT: f64 = 1.0;

/// Cost of digging a cell that touches existing floor, discouraging
/// parallel tunnels that hug room walls
pub const HUG_WEIGHT: f64 = 96.0;

/// Trace step budget as a multiple of the doubled node count
pub const TRACE_BUDGET_FACTOR: usize = 2;
