//! Jump physics
//!
//! Vertical motion only: the player never moves along the scroll axis, the
//! world does. A small state machine integrates velocity and position from
//! the per-tick intent snapshot, with a hold-to-float option that cuts
//! deceleration to a third while falling.

use crate::config::GameConfig;

use super::tick::TickInput;

/// Which takeoff fired this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Takeoff {
    Regular,
    Big,
}

/// Vertical state of the player character.
///
/// Invariant: not jumping implies zero velocity and resting at the ground
/// height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Vertical position; rests at the ground height
    pub height: f32,
    /// Signed vertical velocity, positive = ascending
    pub velocity: f32,
    /// True while airborne
    pub jumping: bool,
}

impl PlayerState {
    pub fn grounded(ground_height: f32) -> Self {
        Self {
            height: ground_height,
            velocity: 0.0,
            jumping: false,
        }
    }

    /// Advance the state machine by `dt`. Exactly one branch runs per tick,
    /// first match in priority order. Floating only changes the
    /// deceleration rate while airborne and falling; it never initiates a
    /// jump.
    pub fn integrate(
        &mut self,
        input: &TickInput,
        dt: f32,
        config: &GameConfig,
    ) -> Option<Takeoff> {
        if input.big_jump && !self.jumping {
            self.jumping = true;
            self.velocity = config.init_velocity * 1.25;
            self.height += self.velocity * dt;
            Some(Takeoff::Big)
        } else if input.jump && !self.jumping {
            self.jumping = true;
            self.velocity = config.init_velocity;
            self.height += self.velocity * dt;
            Some(Takeoff::Regular)
        } else if input.float && self.jumping && self.velocity < 0.0 {
            self.fall(config.gravity / 3.0, dt, config.ground_height);
            None
        } else if self.jumping {
            self.fall(config.gravity, dt, config.ground_height);
            None
        } else {
            None
        }
    }

    /// Decelerate and either commit the new position or land. Landing is
    /// edge-triggered by the position crossing the ground, not by the
    /// velocity sign, so a float-assisted descent touches down exactly
    /// where the trajectory meets the ground.
    fn fall(&mut self, deceleration: f32, dt: f32, ground_height: f32) {
        self.velocity -= deceleration * dt;
        let candidate = self.height + self.velocity * dt;
        if candidate > ground_height {
            self.height = candidate;
        } else {
            self.jumping = false;
            self.velocity = 0.0;
            self.height = ground_height;
        }
    }
}
