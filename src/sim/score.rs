//! Monotonic score bookkeeping
//!
//! Two sources, both additive: a passive per-tick survival reward and a
//! bonus per obstacle that scrolls off-screen. The accumulator also spots
//! milestone boundary crossings so the orchestrator can emit events.

/// Session score; only ever goes up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAccumulator {
    score: u64,
    milestone_interval: u64,
}

impl ScoreAccumulator {
    pub fn new(milestone_interval: u64) -> Self {
        debug_assert!(milestone_interval > 0);
        Self {
            score: 0,
            milestone_interval,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Add points, returning how many milestone boundaries were crossed
    pub fn add(&mut self, points: u64) -> u32 {
        let before = self.score / self.milestone_interval;
        self.score += points;
        let after = self.score / self.milestone_interval;
        (after - before) as u32
    }
}
