//! Session orchestration
//!
//! Owns everything mutable - player, obstacle field, score, clock, RNG -
//! and advances it one admitted tick at a time. A tick runs to completion
//! synchronously (intents, difficulty, physics, obstacles, score, emission)
//! before the next one can be admitted, so nothing ever interleaves.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{ConfigError, RunnerConfig};

use super::clock::FrameClock;
use super::difficulty::DifficultyCurve;
use super::events::{GameEvent, SoundKind};
use super::input::{InputIntent, IntentQueue};
use super::obstacles::ObstacleField;
use super::player::PlayerBody;
use super::score::ScoreAccumulator;
use super::snapshot::{FrameSnapshot, PlayerView};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session yet
    Idle,
    /// Ticks are being admitted and simulated
    Running,
    /// Clock disarmed, session state frozen verbatim
    Paused,
    /// Terminal collision happened; state is read-only history
    Ended,
}

/// Everything produced by one admitted tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub snapshot: FrameSnapshot,
    pub events: Vec<GameEvent>,
}

/// Per-session mutable state; rebuilt from scratch on every (re)start
#[derive(Debug, Clone)]
struct Session {
    player: PlayerBody,
    field: ObstacleField,
    score: ScoreAccumulator,
    rng: Pcg32,
    /// Session time: sum of elapsed over admitted ticks, so pauses never count
    elapsed_ms: f64,
    last_difficulty_ms: f64,
    difficulty: f32,
    ground_offset: f32,
}

impl Session {
    fn new(config: &RunnerConfig, seed: u64) -> Self {
        Self {
            player: PlayerBody::new(config),
            field: ObstacleField::new(),
            score: ScoreAccumulator::new(config.milestone_interval),
            rng: Pcg32::seed_from_u64(seed),
            elapsed_ms: 0.0,
            last_difficulty_ms: 0.0,
            difficulty: 1.0,
            ground_offset: 0.0,
        }
    }
}

/// The simulation loop: drives one tick per eligible display refresh
#[derive(Debug, Clone)]
pub struct GameLoop {
    config: RunnerConfig,
    curve: DifficultyCurve,
    clock: FrameClock,
    intents: IntentQueue,
    phase: Phase,
    session: Option<Session>,
    seed: u64,
    sessions_started: u64,
}

impl GameLoop {
    /// Validate the config and build an idle loop; refuses invalid tunables
    /// before any session can start.
    pub fn new(config: RunnerConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Like [`GameLoop::new`] but with a fixed seed for reproducible sessions
    pub fn with_seed(config: RunnerConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            curve: DifficultyCurve::new(config.difficulty_plateau, config.difficulty_step),
            clock: FrameClock::new(config.min_frame_interval_ms),
            intents: IntentQueue::new(),
            phase: Phase::Idle,
            session: None,
            seed,
            sessions_started: 0,
            config,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Current score; 0 before the first session
    pub fn score(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.score.score())
    }

    /// Begin a session from Idle; a no-op in any other phase
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.begin_session();
        }
    }

    /// Freeze a running session; the clock is disarmed immediately, so no
    /// tick admitted before this call can land after it returns.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.clock.stop();
            self.phase = Phase::Paused;
        }
    }

    /// Re-arm a paused session. The clock rebases on the next refresh
    /// signal, so the pause duration never shows up as elapsed time.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.clock.start();
            self.phase = Phase::Running;
        }
    }

    /// Discard the session (running, paused, or ended) and start fresh.
    /// No obstacle, velocity, or score survives. A no-op while Idle.
    pub fn restart(&mut self) {
        if self.phase != Phase::Idle {
            self.begin_session();
        }
    }

    fn begin_session(&mut self) {
        let session_seed = self
            .seed
            .wrapping_add(self.sessions_started.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.sessions_started += 1;
        log::info!(
            "session {} starting (seed {:#x})",
            self.sessions_started,
            session_seed
        );
        self.session = Some(Session::new(&self.config, session_seed));
        self.intents.clear();
        self.phase = Phase::Running;
        self.clock.start();
    }

    /// Queue a normalized input intent for the next admitted tick.
    /// Intents arriving while not Running are dropped.
    pub fn queue_intent(&mut self, intent: InputIntent) {
        if self.phase == Phase::Running {
            self.intents.push(intent);
        }
    }

    /// Feed one display-refresh signal.
    ///
    /// Returns `None` when the clock drops the signal (paused, ended, under
    /// the 60 Hz cap) and `Some(FrameOutput)` for every admitted tick.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Option<FrameOutput> {
        let tick = self.clock.on_external_tick(timestamp_ms)?;
        if self.phase != Phase::Running {
            return None;
        }
        let session = self.session.as_mut()?;
        let config = &self.config;
        let mut events = Vec::new();

        session.elapsed_ms += tick.elapsed_ms;
        let now_ms = session.elapsed_ms;

        // Queued intents, in arrival order
        for intent in self.intents.drain() {
            if session.player.apply_intent(intent) && intent == InputIntent::Jump {
                events.push(GameEvent::SoundTrigger(SoundKind::Jump));
            }
        }

        // Difficulty first, so a spawn due this tick sees the new multiplier
        if now_ms - session.last_difficulty_ms >= config.difficulty_interval_ms {
            let multiplier = self.curve.multiplier(session.score.score());
            if multiplier > session.difficulty {
                log::info!(
                    "difficulty raised to {:.1}x at score {}",
                    multiplier,
                    session.score.score()
                );
            }
            session.difficulty = session.difficulty.max(multiplier);
            session.last_difficulty_ms = now_ms;
        }

        session.player.integrate();

        let player_hitbox = session.player.hitbox();
        let step = session.field.step(
            now_ms,
            session.difficulty,
            &player_hitbox,
            &mut session.rng,
            config,
        );

        // Survival reward plus pass bonuses, both monotonic
        let mut milestones = session.score.add(config.passive_score_per_tick);
        milestones += session
            .score
            .add(step.passed as u64 * config.obstacle_pass_bonus);
        let score = session.score.score();

        // Rendering-only scroll offset, wrapped to one ground tile
        session.ground_offset -= config.ground_speed * session.difficulty;
        while session.ground_offset <= -config.ground_tile {
            session.ground_offset += config.ground_tile;
        }

        if step.collided {
            events.push(GameEvent::SoundTrigger(SoundKind::Collision));
            events.push(GameEvent::GameOver(score));
            log::info!("game over at score {score}");
            self.clock.stop();
            self.phase = Phase::Ended;
        } else {
            events.push(GameEvent::ScoreUpdated(score));
            if milestones > 0 {
                events.push(GameEvent::Milestone(score));
                events.push(GameEvent::SoundTrigger(SoundKind::Score));
            }
        }

        let snapshot = Self::build_snapshot(session, tick.fps);
        Some(FrameOutput { snapshot, events })
    }

    /// Current renderable state, independent of tick emission (e.g. for a
    /// pause screen). `None` before the first session.
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        self.session
            .as_ref()
            .map(|s| Self::build_snapshot(s, self.clock.fps()))
    }

    fn build_snapshot(session: &Session, fps: u32) -> FrameSnapshot {
        FrameSnapshot {
            player: PlayerView {
                hitbox: session.player.hitbox(),
                stance: session.player.stance(),
            },
            obstacles: session.field.obstacles().to_vec(),
            ground_offset: session.ground_offset,
            score: session.score.score(),
            difficulty: session.difficulty,
            fps,
        }
    }
}
