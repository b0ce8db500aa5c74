//! Score-driven difficulty scaling
//!
//! A pure step function: every full plateau of points raises the speed
//! multiplier by one step. The orchestrator decides *when* to recompute;
//! re-deriving from the same score always yields the same value.

/// Maps score to a speed multiplier >= 1.0
#[derive(Debug, Clone, Copy)]
pub struct DifficultyCurve {
    plateau: u64,
    step: f32,
}

impl DifficultyCurve {
    pub fn new(plateau: u64, step: f32) -> Self {
        debug_assert!(plateau > 0);
        Self { plateau, step }
    }

    /// `1 + floor(score / plateau) * step`, monotonic non-decreasing in score
    pub fn multiplier(&self, score: u64) -> f32 {
        1.0 + (score / self.plateau) as f32 * self.step
    }
}
