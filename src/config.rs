//! Session configuration
//!
//! The named tuning constants a session runs with. Supplied at construction,
//! validated once, immutable afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration values. Construction-time fatal; there is no
/// recoverable-error path once a session is running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("segment length must be positive, got {0}")]
    SegmentLength(f32),
    #[error("segment count must be at least 1")]
    SegmentCount,
    #[error("floor time must be positive, got {0}")]
    FloorTime(f32),
    #[error("initial jump velocity must be positive, got {0}")]
    InitVelocity(f32),
    #[error("gravity must be positive, got {0}")]
    Gravity(f32),
    #[error("minimum obstacle gap must be positive, got {0}")]
    MinGap(f32),
    #[error("place threshold must be within [0, 1], got {0}")]
    PlaceThreshold(f32),
}

/// Tuning constants for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of one track segment (world units)
    pub floor_length: f32,
    /// Number of segments in the ring
    pub num_floors: usize,
    /// Wall-clock seconds for a segment to traverse its own length
    pub floor_time: f32,
    /// Upward velocity at regular-jump takeoff (big jumps get 1.25x)
    pub init_velocity: f32,
    /// Downward acceleration while airborne (floating cuts it to a third)
    pub gravity: f32,
    /// Minimum world distance between consecutive placed obstacles
    pub min_gap: f32,
    /// Probability that a sampled obstacle position is skipped rather
    /// than placed
    pub place_threshold: f32,
    /// Resting height of the player
    pub ground_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            floor_length: 20.0,
            num_floors: 6,
            floor_time: 1.5,
            init_velocity: 20.0,
            gravity: 30.0,
            min_gap: 18.0,
            place_threshold: 0.6,
            ground_height: 2.5,
        }
    }
}

impl GameConfig {
    /// Scroll speed, derived so that a segment covers its own length in
    /// `floor_time` seconds. Score accrual uses the same constant, keeping
    /// score rate coupled to segment geometry.
    pub fn speed(&self) -> f32 {
        self.floor_length / self.floor_time
    }

    /// Reject out-of-range values. `min_gap >= floor_length` is the legal
    /// degenerate case of a track with no obstacles, not an error.
    ///
    /// The comparisons are written negated so NaN fails them too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.floor_length > 0.0) {
            return Err(ConfigError::SegmentLength(self.floor_length));
        }
        if self.num_floors == 0 {
            return Err(ConfigError::SegmentCount);
        }
        if !(self.floor_time > 0.0) {
            return Err(ConfigError::FloorTime(self.floor_time));
        }
        if !(self.init_velocity > 0.0) {
            return Err(ConfigError::InitVelocity(self.init_velocity));
        }
        if !(self.gravity > 0.0) {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if !(self.min_gap > 0.0) {
            return Err(ConfigError::MinGap(self.min_gap));
        }
        if !(self.place_threshold >= 0.0 && self.place_threshold <= 1.0) {
            return Err(ConfigError::PlaceThreshold(self.place_threshold));
        }
        Ok(())
    }
}
