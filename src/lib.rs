//! Horizon Runner - an endless runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (frame pacing, physics, obstacles, score)
//! - `config`: Data-driven game balance with construction-time validation
//!
//! The crate owns no window, canvas, or audio device. An embedding shell
//! feeds display-refresh timestamps and input intents in, and gets back an
//! immutable [`sim::FrameSnapshot`] plus [`sim::GameEvent`]s per admitted
//! tick. Rendering, sound playback, and score persistence live entirely in
//! the shell.

pub mod config;
pub mod sim;

pub use config::{ConfigError, RunnerConfig};
pub use sim::{
    FrameClock, FrameOutput, FrameSnapshot, GameEvent, GameLoop, InputIntent, Obstacle,
    ObstacleField, ObstacleKind, Phase, PlayerBody, Rect, SoundKind, Stance,
};

/// Default game balance constants
pub mod consts {
    /// 60 Hz cap: external refresh signals closer together than this are dropped
    pub const MIN_FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;
    /// Throughput sampling window for the fps estimate
    pub const FPS_WINDOW_MS: f64 = 1000.0;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Height of the scrolling ground band at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Width of one ground tile (the scroll offset wraps at this)
    pub const GROUND_TILE: f32 = 50.0;

    /// Player defaults - x is fixed, only y moves
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Initial upward speed when a jump is applied (pixels per tick)
    pub const JUMP_SPEED: f32 = 15.0;
    /// Downward acceleration while airborne (pixels per tick squared)
    pub const GRAVITY: f32 = 0.8;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;
    /// Leftward obstacle speed at multiplier 1.0 (pixels per tick)
    pub const BASE_OBSTACLE_SPEED: f32 = 5.0;
    /// Ground scroll speed at multiplier 1.0 (pixels per tick, rendering only)
    pub const GROUND_SPEED: f32 = 5.0;
    /// How far above the ground line a High obstacle floats
    pub const HIGH_LINE_RAISE: f32 = 50.0;

    /// Spawn gap at multiplier 1.0; higher difficulty shortens it
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 2000.0;
    /// Minimum session time between difficulty recomputes
    pub const DIFFICULTY_INTERVAL_MS: f64 = 10_000.0;
    /// Multiplier gain per score plateau
    pub const DIFFICULTY_STEP: f32 = 0.2;
    /// Score points per difficulty plateau
    pub const DIFFICULTY_PLATEAU: u64 = 1000;

    /// Survival reward per admitted tick
    pub const PASSIVE_SCORE_PER_TICK: u64 = 1;
    /// Bonus for each obstacle that scrolls fully past the left edge
    pub const OBSTACLE_PASS_BONUS: u64 = 10;
    /// Milestone event every this many points
    pub const MILESTONE_INTERVAL: u64 = 500;
}
