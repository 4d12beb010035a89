//! Game state aggregate and per-frame events
//!
//! Everything one session owns lives here: the segment ring, the player's
//! vertical state, the seeded RNG and the event queue for the outer shell.
//! `tick` is the only mutation path, so there is never a partially updated
//! state visible between frames.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{ConfigError, GameConfig};

use super::jump::PlayerState;
use super::track::SegmentRing;

/// Score interval between milestone events.
pub const MILESTONE_STEP: u64 = 100;

/// Discrete notifications for the audio, scene and presentation
/// collaborators. Fire-and-forget: nothing the shell does with them flows
/// back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Regular takeoff
    Jump,
    /// Big takeoff (1.25x initial velocity)
    BigJump,
    /// The score crossed a milestone boundary
    ScoreMilestone { score: u64 },
    /// A segment rotated from the head of the ring to the tail; the scene
    /// should relocate its visual representation
    SegmentRecycled { segment: u32 },
    /// An obstacle was placed at a local position on a segment; the scene
    /// should instantiate a model there
    ObstaclePlaced { segment: u32, position: f32 },
    /// The run is over
    Collision,
}

/// Complete session state. Created at session start, dropped at session
/// end.
#[derive(Debug)]
pub struct GameState {
    /// Run seed, kept for reproducibility reports
    pub seed: u64,
    pub config: GameConfig,
    pub ring: SegmentRing,
    pub player: PlayerState,
    /// Session seconds integrated from tick deltas
    pub elapsed: f32,
    /// True once any player volume touched an obstacle; terminal
    pub collided: bool,
    pub(super) rng: Pcg32,
    pub(super) next_milestone: u64,
    pub(super) events: Vec<GameEvent>,
}

impl GameState {
    /// Validate the configuration and build a fresh session.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let ring = SegmentRing::new(config.num_floors, config.floor_length)?;
        Ok(Self {
            seed,
            player: PlayerState::grounded(config.ground_height),
            ring,
            elapsed: 0.0,
            collided: false,
            rng: Pcg32::seed_from_u64(seed),
            next_milestone: MILESTONE_STEP,
            config,
            events: Vec::new(),
        })
    }

    /// Display score: session time at scroll speed, truncated. Derived
    /// from elapsed time rather than scrolled distance.
    pub fn score(&self) -> u64 {
        (self.elapsed * self.config.speed()).floor() as u64
    }

    /// Drain the events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_grounded_and_clean() {
        let state = GameState::new(GameConfig::default(), 1).unwrap();
        assert!(!state.collided);
        assert!(!state.player.jumping);
        assert_eq!(state.score(), 0);
        assert_eq!(state.ring.len(), 6);
        assert_eq!(state.ring.active_obstacles().count(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            place_threshold: -0.1,
            ..GameConfig::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn test_score_formula() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.elapsed = 1.0;
        // 1 s at 20/1.5 units per second, truncated
        assert_eq!(state.score(), 13);
    }

    #[test]
    fn test_take_events_drains() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.push_event(GameEvent::Jump);
        assert_eq!(state.take_events(), vec![GameEvent::Jump]);
        assert!(state.take_events().is_empty());
    }
}
