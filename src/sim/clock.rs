//! Frame-pacing clock
//!
//! Converts "a display refresh happened at time T" signals into admitted
//! simulation ticks capped at 60 Hz, and keeps an advisory fps estimate.
//! Pull model: the embedder calls [`FrameClock::on_external_tick`] and gets
//! `None` when the signal is dropped. Elapsed time is measured against the
//! last *admitted* timestamp, so sub-interval refreshes accumulate instead
//! of being swallowed.

use crate::consts::FPS_WINDOW_MS;

/// One admitted simulation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmittedTick {
    /// Wall time since the previously admitted tick
    pub elapsed_ms: f64,
    /// Ticks admitted in the last full sampling window (advisory only)
    pub fps: u32,
}

/// Admits or drops external refresh signals
#[derive(Debug, Clone)]
pub struct FrameClock {
    min_interval_ms: f64,
    armed: bool,
    /// None right after arming: the next signal only rebases
    last_admitted_ms: Option<f64>,
    window_start_ms: f64,
    frames_in_window: u32,
    fps: u32,
}

impl FrameClock {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            armed: false,
            last_admitted_ms: None,
            window_start_ms: 0.0,
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Arm the clock. Always restarts timestamp tracking, so starting while
    /// already started cannot produce a spurious huge elapsed value.
    pub fn start(&mut self) {
        self.armed = true;
        self.last_admitted_ms = None;
        self.frames_in_window = 0;
    }

    /// Disarm. Idempotent; a disarmed clock can never admit a tick.
    pub fn stop(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Latest fps estimate
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Feed one external refresh signal.
    ///
    /// Returns the admitted tick, or `None` when the signal is dropped:
    /// disarmed, first signal after arming (rebase only), or under the
    /// minimum frame interval since the last admitted tick.
    pub fn on_external_tick(&mut self, timestamp_ms: f64) -> Option<AdmittedTick> {
        if !self.armed {
            return None;
        }

        let Some(last) = self.last_admitted_ms else {
            self.last_admitted_ms = Some(timestamp_ms);
            self.window_start_ms = timestamp_ms;
            self.frames_in_window = 0;
            return None;
        };

        let elapsed_ms = timestamp_ms - last;
        if elapsed_ms < self.min_interval_ms {
            return None;
        }

        self.last_admitted_ms = Some(timestamp_ms);
        self.frames_in_window += 1;
        if timestamp_ms - self.window_start_ms >= FPS_WINDOW_MS {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start_ms = timestamp_ms;
        }

        Some(AdmittedTick {
            elapsed_ms,
            fps: self.fps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MIN_FRAME_INTERVAL_MS;

    fn armed_clock() -> FrameClock {
        let mut clock = FrameClock::new(MIN_FRAME_INTERVAL_MS);
        clock.start();
        // Rebase signal
        assert!(clock.on_external_tick(1000.0).is_none());
        clock
    }

    #[test]
    fn test_disarmed_clock_admits_nothing() {
        let mut clock = FrameClock::new(MIN_FRAME_INTERVAL_MS);
        assert!(clock.on_external_tick(0.0).is_none());
        assert!(clock.on_external_tick(100.0).is_none());
    }

    #[test]
    fn test_sub_interval_signals_are_dropped() {
        let mut clock = armed_clock();
        // 8 ms after the rebase: under the 60 Hz cap
        assert!(clock.on_external_tick(1008.0).is_none());
        // 16 ms after the last *admitted* timestamp: still under 16.67
        assert!(clock.on_external_tick(1016.0).is_none());
        // The dropped signals did not move the reference point
        let tick = clock.on_external_tick(1017.0).unwrap();
        assert!((tick.elapsed_ms - 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_admits_at_display_rate() {
        let mut clock = armed_clock();
        let mut ts = 1000.0;
        for _ in 0..10 {
            ts += 17.0;
            assert!(clock.on_external_tick(ts).is_some());
        }
    }

    #[test]
    fn test_fps_window_sampling() {
        let mut clock = armed_clock();
        let mut ts = 1000.0;
        let mut last_fps = 0;
        // ~59 admitted ticks fit in the first 1000 ms window
        for _ in 0..70 {
            ts += 17.0;
            if let Some(tick) = clock.on_external_tick(ts) {
                last_fps = tick.fps;
            }
        }
        assert!(last_fps >= 55 && last_fps <= 60, "fps estimate {last_fps}");
    }

    #[test]
    fn test_restart_rebases_timestamps() {
        let mut clock = armed_clock();
        assert!(clock.on_external_tick(1020.0).is_some());

        // Re-arm much later: no phantom elapsed on the next signal
        clock.start();
        assert!(clock.on_external_tick(500_000.0).is_none());
        let tick = clock.on_external_tick(500_020.0).unwrap();
        assert!((tick.elapsed_ms - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_stop_is_idempotent_and_immediate() {
        let mut clock = armed_clock();
        clock.stop();
        clock.stop();
        assert!(!clock.is_armed());
        assert!(clock.on_external_tick(2000.0).is_none());
    }
}
