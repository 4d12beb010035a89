//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by the caller's clock, one `tick` per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod jump;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{Capsule, Sphere, hits_any, player_volumes, sphere_capsule_overlap};
pub use jump::{PlayerState, Takeoff};
pub use spawn::populate;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, TickOutput, tick};
pub use track::{Obstacle, Segment, SegmentRing};
