//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete integration step per admitted tick
//! - Seeded RNG only
//! - Stable obstacle order (by spawn id)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod events;
pub mod game_loop;
pub mod input;
pub mod obstacles;
pub mod player;
pub mod score;
pub mod snapshot;

pub use clock::{AdmittedTick, FrameClock};
pub use collision::Rect;
pub use difficulty::DifficultyCurve;
pub use events::{GameEvent, SoundKind};
pub use game_loop::{FrameOutput, GameLoop, Phase};
pub use input::{InputIntent, IntentQueue};
pub use obstacles::{FieldStep, Obstacle, ObstacleField, ObstacleKind};
pub use player::{PlayerBody, Stance};
pub use score::ScoreAccumulator;
pub use snapshot::{FrameSnapshot, PlayerView};
