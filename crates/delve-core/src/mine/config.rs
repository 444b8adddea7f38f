//! Planner configuration and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_DIG_COST, DEFAULT_HEIGHT, DEFAULT_MAX_ROOMS, DEFAULT_MAX_ROOM_AREA, DEFAULT_MIN_ROOMS,
    DEFAULT_MIN_ROOM_AREA, DEFAULT_TURN_COST, DEFAULT_WIDTH,
};

use super::geometry::Rect;

/// Errors for malformed configuration
///
/// A validated configuration never fails later: degenerate situations
/// (too little space, fewer than two rooms) degrade by omission instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("bounding rectangle must have positive dimensions, got {w}x{h}")]
    EmptyBounds { w: i32, h: i32 },

    #[error("room count range is inverted: min {min} > max {max}")]
    RoomCountRange { min: u32, max: u32 },

    #[error("room area range is invalid: min {min}, max {max}")]
    RoomAreaRange { min: i32, max: i32 },

    #[error("digging cost must be positive, got {0}")]
    NonPositiveDigCost(f64),

    #[error("turning cost must not be negative, got {0}")]
    NegativeTurnCost(f64),
}

/// Input record for one planning run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MineConfig {
    /// Bounding rectangle; rooms are placed in its one-cell inset
    pub bounds: Rect,
    /// Requested room count range (the partition quota is drawn from it)
    pub min_rooms: u32,
    pub max_rooms: u32,
    /// Allowed room area range in cells
    pub min_room_area: i32,
    pub max_room_area: i32,
    /// Base cost of digging one undug cell
    pub dig_cost: f64,
    /// Cost of one 90-degree turn while digging
    pub turn_cost: f64,
}

impl Default for MineConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0, 0, DEFAULT_WIDTH, DEFAULT_HEIGHT),
            min_rooms: DEFAULT_MIN_ROOMS,
            max_rooms: DEFAULT_MAX_ROOMS,
            min_room_area: DEFAULT_MIN_ROOM_AREA,
            max_room_area: DEFAULT_MAX_ROOM_AREA,
            dig_cost: DEFAULT_DIG_COST,
            turn_cost: DEFAULT_TURN_COST,
        }
    }
}

impl MineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.w <= 0 || self.bounds.h <= 0 {
            return Err(ConfigError::EmptyBounds {
                w: self.bounds.w,
                h: self.bounds.h,
            });
        }
        if self.min_rooms > self.max_rooms {
            return Err(ConfigError::RoomCountRange {
                min: self.min_rooms,
                max: self.max_rooms,
            });
        }
        if self.min_room_area <= 0 || self.min_room_area > self.max_room_area {
            return Err(ConfigError::RoomAreaRange {
                min: self.min_room_area,
                max: self.max_room_area,
            });
        }
        if self.dig_cost <= 0.0 {
            return Err(ConfigError::NonPositiveDigCost(self.dig_cost));
        }
        if self.turn_cost < 0.0 {
            return Err(ConfigError::NegativeTurnCost(self.turn_cost));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_empty_bounds() {
        let config = MineConfig {
            bounds: Rect::new(0, 0, 0, 10),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let config = MineConfig {
            min_rooms: 5,
            max_rooms: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomCountRange { .. })
        ));

        let config = MineConfig {
            min_room_area: 50,
            max_room_area: 9,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomAreaRange { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_costs() {
        let config = MineConfig {
            dig_cost: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDigCost(_))
        ));

        let config = MineConfig {
            turn_cost: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeTurnCost(_))
        ));
    }

    #[test]
    fn test_zero_rooms_is_well_formed() {
        let config = MineConfig {
            min_rooms: 0,
            max_rooms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
