//! Dino Dash - simulation core of an endless side-scrolling runner
//!
//! Core modules:
//! - `config`: session tuning constants, validated once at construction
//! - `sim`: deterministic simulation (track recycling, obstacle generation,
//!   jump physics, collision detection)
//!
//! Windowing, models, audio playback and input binding live outside this
//! crate. The core consumes a per-frame intent snapshot plus an elapsed-time
//! delta, and produces the updated world state, a stream of discrete events
//! for the scene/audio collaborators, and a terminal collision flag.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GameEvent, GameState, TickInput, TickOutput, tick};

/// Fixed body geometry. World axes: x lateral, y scroll, z up.
///
/// These are model-space measurements of the shipped character and obstacle
/// assets, so unlike [`config::GameConfig`] they are compile-time constants.
pub mod consts {
    use glam::Vec3;

    /// Player model origin on the lateral axis (the player never moves
    /// horizontally; the world scrolls instead)
    pub const PLAYER_ORIGIN_X: f32 = -1.0;
    /// Player model origin on the scroll axis
    pub const PLAYER_ORIGIN_Y: f32 = 0.0;

    /// Head hit-sphere offset from the player origin
    pub const HEAD_OFFSET: Vec3 = Vec3::new(1.65, 2.7, 2.8);
    pub const HEAD_RADIUS: f32 = 1.2;

    /// Body hit-sphere offset from the player origin
    pub const BODY_OFFSET: Vec3 = Vec3::new(1.65, 0.19, 0.03);
    pub const BODY_RADIUS: f32 = 2.5;

    /// Obstacle hit-capsule endpoints, relative to the obstacle's position
    /// on its segment
    pub const OBSTACLE_CAPSULE_A: Vec3 = Vec3::new(0.0, -1.0, 2.0);
    pub const OBSTACLE_CAPSULE_B: Vec3 = Vec3::new(0.0, -1.0, 4.0);
    pub const OBSTACLE_RADIUS: f32 = 1.5;
}
