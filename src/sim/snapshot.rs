//! Renderable state snapshots
//!
//! Simulation truth lives in plain owned fields mutated synchronously per
//! tick; what observers get is this detached, serializable copy produced
//! after the tick completes. A renderer can never reach back into the core.

use serde::Serialize;

use super::collision::Rect;
use super::obstacles::Obstacle;
use super::player::Stance;

/// Player state as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub hitbox: Rect,
    pub stance: Stance,
}

/// Immutable copy of everything a frame needs to be drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub player: PlayerView,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Cyclic ground scroll offset, in (-ground_tile, 0]
    pub ground_offset: f32,
    pub score: u64,
    pub difficulty: f32,
    /// Advisory throughput estimate from the frame clock
    pub fps: u32,
}
