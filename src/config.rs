//! Game balance configuration
//!
//! Every tunable the simulation consumes lives here as a named field so
//! balance can be adjusted (or loaded from JSON by an embedding shell)
//! without touching the loop logic. Validation happens once, before a
//! session can start.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration, reported before any session starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field dimensions must be positive (got {width}x{height})")]
    InvalidField { width: f32, height: f32 },
    #[error("player dimensions must be positive (got {width}x{height})")]
    InvalidPlayer { width: f32, height: f32 },
    #[error("obstacle dimensions must be positive (got {width}x{height})")]
    InvalidObstacle { width: f32, height: f32 },
    #[error("player must fit inside the field (x={x}, width={width})")]
    PlayerOutOfField { x: f32, width: f32 },
    #[error("ground band must fit inside the field (got {0})")]
    InvalidGround(f32),
    #[error("spawn interval must be positive (got {0} ms)")]
    InvalidSpawnInterval(f64),
    #[error("minimum frame interval must be positive (got {0} ms)")]
    InvalidFrameInterval(f64),
    #[error("difficulty recompute interval must be positive (got {0} ms)")]
    InvalidDifficultyInterval(f64),
    #[error("difficulty plateau must be nonzero")]
    ZeroDifficultyPlateau,
    #[error("milestone interval must be nonzero")]
    ZeroMilestoneInterval,
    #[error("jump speed and gravity must be positive (got {jump_speed}, {gravity})")]
    InvalidPhysics { jump_speed: f32, gravity: f32 },
    #[error("obstacle speed must be positive (got {0})")]
    InvalidSpeed(f32),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// All simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Play field dimensions
    pub field_width: f32,
    pub field_height: f32,
    /// Height of the scrolling ground band
    pub ground_height: f32,
    /// Ground tile width (scroll offset wraps at this)
    pub ground_tile: f32,

    /// Fixed player x position
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Upward speed applied on jump (pixels per tick)
    pub jump_speed: f32,
    /// Downward acceleration while airborne (pixels per tick squared)
    pub gravity: f32,

    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Obstacle speed at multiplier 1.0 (pixels per tick)
    pub base_obstacle_speed: f32,
    /// Ground scroll speed at multiplier 1.0 (pixels per tick)
    pub ground_speed: f32,
    /// How far above the ground line a High obstacle floats
    pub high_line_raise: f32,

    /// Spawn gap at multiplier 1.0; divided by the difficulty multiplier
    pub base_spawn_interval_ms: f64,
    /// Minimum session time between difficulty recomputes
    pub difficulty_interval_ms: f64,
    /// Multiplier gain per score plateau
    pub difficulty_step: f32,
    /// Score points per difficulty plateau
    pub difficulty_plateau: u64,

    /// Survival reward per admitted tick
    pub passive_score_per_tick: u64,
    /// Bonus per obstacle that scrolls fully off the left edge
    pub obstacle_pass_bonus: u64,
    /// Milestone event every this many points
    pub milestone_interval: u64,

    /// External refresh signals closer together than this are dropped
    pub min_frame_interval_ms: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            ground_tile: GROUND_TILE,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            base_obstacle_speed: BASE_OBSTACLE_SPEED,
            ground_speed: GROUND_SPEED,
            high_line_raise: HIGH_LINE_RAISE,
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            difficulty_interval_ms: DIFFICULTY_INTERVAL_MS,
            difficulty_step: DIFFICULTY_STEP,
            difficulty_plateau: DIFFICULTY_PLATEAU,
            passive_score_per_tick: PASSIVE_SCORE_PER_TICK,
            obstacle_pass_bonus: OBSTACLE_PASS_BONUS,
            milestone_interval: MILESTONE_INTERVAL,
            min_frame_interval_ms: MIN_FRAME_INTERVAL_MS,
        }
    }
}

impl RunnerConfig {
    /// Check every tunable; an invalid config never reaches a running session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 {
            return Err(ConfigError::InvalidPlayer {
                width: self.player_width,
                height: self.player_height,
            });
        }
        if self.obstacle_width <= 0.0 || self.obstacle_height <= 0.0 {
            return Err(ConfigError::InvalidObstacle {
                width: self.obstacle_width,
                height: self.obstacle_height,
            });
        }
        if self.player_x < 0.0 || self.player_x + self.player_width > self.field_width {
            return Err(ConfigError::PlayerOutOfField {
                x: self.player_x,
                width: self.player_width,
            });
        }
        if self.ground_height < 0.0
            || self.ground_tile <= 0.0
            || self.ground_height + self.player_height > self.field_height
        {
            return Err(ConfigError::InvalidGround(self.ground_height));
        }
        if self.base_spawn_interval_ms <= 0.0 {
            return Err(ConfigError::InvalidSpawnInterval(self.base_spawn_interval_ms));
        }
        if self.min_frame_interval_ms <= 0.0 {
            return Err(ConfigError::InvalidFrameInterval(self.min_frame_interval_ms));
        }
        if self.difficulty_interval_ms <= 0.0 {
            return Err(ConfigError::InvalidDifficultyInterval(
                self.difficulty_interval_ms,
            ));
        }
        if self.difficulty_plateau == 0 {
            return Err(ConfigError::ZeroDifficultyPlateau);
        }
        if self.milestone_interval == 0 {
            return Err(ConfigError::ZeroMilestoneInterval);
        }
        if self.jump_speed <= 0.0 || self.gravity <= 0.0 {
            return Err(ConfigError::InvalidPhysics {
                jump_speed: self.jump_speed,
                gravity: self.gravity,
            });
        }
        if self.base_obstacle_speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.base_obstacle_speed));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON (missing fields fall back to defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Top edge of the player hitbox when standing on the ground line
    pub fn player_stand_top(&self) -> f32 {
        self.field_height - self.ground_height - self.player_height
    }

    /// Top edge of an obstacle sitting on the ground line (Low kind)
    pub fn low_obstacle_top(&self) -> f32 {
        self.field_height - self.ground_height - self.obstacle_height
    }

    /// Top edge of a floating obstacle (High kind)
    pub fn high_obstacle_top(&self) -> f32 {
        self.low_obstacle_top() - self.high_line_raise
    }
}
