//! Normalized input intents
//!
//! Keyboard, touch, or autopilot - the shell debounces its devices and feeds
//! the same three intents. Intents queue between ticks and are consumed in
//! arrival order at the start of the next admitted tick; a kind already
//! pending collapses to a single effect (two jump presses, one jump).

use serde::{Deserialize, Serialize};

/// Device-independent input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputIntent {
    Jump,
    Duck,
    DuckRelease,
}

/// Intents buffered between ticks
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pending: Vec<InputIntent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent; duplicates of an already-pending kind are collapsed
    pub fn push(&mut self, intent: InputIntent) {
        if !self.pending.contains(&intent) {
            self.pending.push(intent);
        }
    }

    /// Take everything queued so far, in arrival order
    pub fn drain(&mut self) -> Vec<InputIntent> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
