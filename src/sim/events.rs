//! Events emitted to external collaborators
//!
//! Fire-and-forget from the simulation's perspective: the HUD, the audio
//! shell, and the persistence layer each pick out what they care about.
//! The core never hears back.

use serde::{Deserialize, Serialize};

/// Named sound cue; waveform synthesis is the audio collaborator's problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundKind {
    /// Jump intent applied
    Jump,
    /// Terminal collision
    Collision,
    /// Score milestone reached
    Score,
}

/// Per-tick event stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Current score, every surviving tick
    ScoreUpdated(u64),
    /// Score crossed a milestone boundary
    Milestone(u64),
    /// Play a sound now
    SoundTrigger(SoundKind),
    /// Session ended; carries the final score, exactly once per session
    GameOver(u64),
}
