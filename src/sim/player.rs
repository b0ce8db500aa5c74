//! Runner physics and stance state machine
//!
//! The player advances automatically; only the vertical axis is simulated.
//! Stance is a single enum, so the illegal "airborne while ducking" state
//! is unrepresentable. Disallowed intents are silent no-ops.

use serde::{Deserialize, Serialize};

use crate::config::RunnerConfig;

use super::collision::Rect;
use super::input::InputIntent;

/// Vertical state of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    /// On the ground line, full height
    Grounded,
    /// Mid-jump, gravity applies each tick
    Airborne,
    /// Half height, baseline stays on the ground line
    Ducking,
}

/// The runner's body: hitbox, vertical velocity, and stance
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBody {
    hitbox: Rect,
    velocity_y: f32,
    stance: Stance,
    /// Top of the hitbox when standing on the ground line
    stand_top: f32,
    full_height: f32,
    jump_speed: f32,
    gravity: f32,
}

impl PlayerBody {
    pub fn new(config: &RunnerConfig) -> Self {
        let stand_top = config.player_stand_top();
        Self {
            hitbox: Rect::new(
                config.player_x,
                stand_top,
                config.player_width,
                config.player_height,
            ),
            velocity_y: 0.0,
            stance: Stance::Grounded,
            stand_top,
            full_height: config.player_height,
            jump_speed: config.jump_speed,
            gravity: config.gravity,
        }
    }

    /// Current hitbox, read-only to every other component
    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    /// Apply a discrete input intent.
    ///
    /// Returns true iff the intent caused a transition. Jump while ducking
    /// and duck while airborne are dropped here - this is the concurrency
    /// guard the state machine encodes.
    pub fn apply_intent(&mut self, intent: InputIntent) -> bool {
        match (self.stance, intent) {
            (Stance::Grounded, InputIntent::Jump) => {
                self.velocity_y = -self.jump_speed;
                self.stance = Stance::Airborne;
                true
            }
            (Stance::Grounded, InputIntent::Duck) => {
                // Halve the height, keep the baseline on the ground line
                self.hitbox.size.y = self.full_height * 0.5;
                self.hitbox.pos.y = self.stand_top + self.full_height * 0.5;
                self.stance = Stance::Ducking;
                true
            }
            (Stance::Ducking, InputIntent::DuckRelease) => {
                self.hitbox.size.y = self.full_height;
                self.hitbox.pos.y = self.stand_top;
                self.stance = Stance::Grounded;
                true
            }
            _ => false,
        }
    }

    /// One tick of gravity integration; a no-op unless airborne
    pub fn integrate(&mut self) {
        if self.stance != Stance::Airborne {
            return;
        }
        self.velocity_y += self.gravity;
        self.hitbox.pos.y += self.velocity_y;

        if self.hitbox.pos.y >= self.stand_top {
            self.hitbox.pos.y = self.stand_top;
            self.velocity_y = 0.0;
            self.stance = Stance::Grounded;
        }
    }
}
