//! Obstacle spawning, advancement, and culling
//!
//! One global speed moves every obstacle, so relative spacing is preserved.
//! The kind doubles as the required evasive action: Low sits on the ground
//! line and must be jumped, High floats above it and must be ducked under.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::RunnerConfig;

use super::collision::Rect;

/// Which evasive action an obstacle demands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground line; jump over it
    Low,
    /// Floats above the ground line; duck under it
    High,
}

/// A scrolling obstacle entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub hitbox: Rect,
}

/// What one tick of the field did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStep {
    /// Obstacles that scrolled fully past the left edge this tick
    pub passed: u32,
    /// An obstacle overlapped the player this tick
    pub collided: bool,
}

/// The live set of obstacles, ordered by spawn
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    next_id: u32,
    /// Session time of the last spawn
    last_spawn_ms: f64,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live obstacles in spawn order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Spawn an obstacle of the given kind at the right edge of the field.
    ///
    /// Public so tests and tools can force a deterministic kind sequence
    /// instead of going through the RNG.
    pub fn spawn(&mut self, kind: ObstacleKind, config: &RunnerConfig) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let top = match kind {
            ObstacleKind::Low => config.low_obstacle_top(),
            ObstacleKind::High => config.high_obstacle_top(),
        };
        self.obstacles.push(Obstacle {
            id,
            kind,
            hitbox: Rect::new(
                config.field_width,
                top,
                config.obstacle_width,
                config.obstacle_height,
            ),
        });
        id
    }

    /// One tick: spawn if due, advance everything, resolve collisions and
    /// off-screen exits.
    ///
    /// Collision removal wins over an off-screen exit in the same tick: an
    /// obstacle that crosses the left edge while overlapping the player is
    /// a loss, not a score.
    pub fn step(
        &mut self,
        now_ms: f64,
        multiplier: f32,
        player_hitbox: &Rect,
        rng: &mut impl Rng,
        config: &RunnerConfig,
    ) -> FieldStep {
        // Spawn gap shrinks as difficulty rises. The orchestrator recomputes
        // difficulty before calling this, so a same-tick recompute is already
        // reflected in `multiplier`.
        if now_ms - self.last_spawn_ms > config.base_spawn_interval_ms / multiplier as f64 {
            let kind = if rng.random_bool(0.5) {
                ObstacleKind::High
            } else {
                ObstacleKind::Low
            };
            self.spawn(kind, config);
            self.last_spawn_ms = now_ms;
        }

        let speed = config.base_obstacle_speed * multiplier;
        let mut outcome = FieldStep::default();

        self.obstacles.retain_mut(|obstacle| {
            obstacle.hitbox.pos.x -= speed;

            if obstacle.hitbox.overlaps(player_hitbox) {
                outcome.collided = true;
                return false;
            }
            if obstacle.hitbox.right() < 0.0 {
                outcome.passed += 1;
                return false;
            }
            true
        });

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config() -> RunnerConfig {
        RunnerConfig::default()
    }

    /// Player hitbox nowhere near the obstacle lanes
    fn distant_player() -> Rect {
        Rect::new(-1000.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn test_spawn_positions_by_kind() {
        let config = config();
        let mut field = ObstacleField::new();
        field.spawn(ObstacleKind::Low, &config);
        field.spawn(ObstacleKind::High, &config);

        let low = field.obstacles()[0];
        let high = field.obstacles()[1];
        assert_eq!(low.hitbox.left(), config.field_width);
        assert_eq!(low.hitbox.top(), 290.0);
        assert_eq!(high.hitbox.top(), 240.0);
        // Low sits on the ground line
        assert_eq!(low.hitbox.bottom(), config.field_height - config.ground_height);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let config = config();
        let mut field = ObstacleField::new();
        let a = field.spawn(ObstacleKind::Low, &config);
        let b = field.spawn(ObstacleKind::Low, &config);
        let c = field.spawn(ObstacleKind::High, &config);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_advancement_preserves_spacing() {
        let config = config();
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);
        field.spawn(ObstacleKind::Low, &config);
        // Manually separate the pair
        field.obstacles[0].hitbox.pos.x = 500.0;
        field.spawn(ObstacleKind::Low, &config);

        let gap_before = field.obstacles()[1].hitbox.left() - field.obstacles()[0].hitbox.left();
        for _ in 0..20 {
            field.step(0.0, 1.0, &distant_player(), &mut rng, &config);
        }
        let gap_after = field.obstacles()[1].hitbox.left() - field.obstacles()[0].hitbox.left();
        assert_eq!(gap_before, gap_after);
    }

    #[test]
    fn test_offscreen_cull_credits_one_pass() {
        let config = config();
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);
        field.spawn(ObstacleKind::Low, &config);

        // Left edge at 800, width 30, speed 5: trailing edge is at
        // 830 - 5t after t ticks, first < 0 on tick 167.
        let mut total_passed = 0;
        for tick in 1..=167 {
            // now_ms stays at 0 so the spawn gap never elapses
            let step = field.step(0.0, 1.0, &distant_player(), &mut rng, &config);
            assert!(!step.collided);
            total_passed += step.passed;
            if tick < 167 {
                assert_eq!(step.passed, 0, "culled early at tick {tick}");
            } else {
                assert_eq!(step.passed, 1, "not culled on tick {tick}");
            }
        }
        assert_eq!(total_passed, 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_collision_removes_without_pass_credit() {
        let config = config();
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);
        field.spawn(ObstacleKind::Low, &config);
        // Place it just right of the player lane
        field.obstacles[0].hitbox.pos.x = 142.0;

        let player = Rect::new(
            config.player_x,
            config.player_stand_top(),
            config.player_width,
            config.player_height,
        );
        let step = field.step(0.0, 1.0, &player, &mut rng, &config);
        assert!(step.collided);
        assert_eq!(step.passed, 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_collision_wins_over_offscreen_exit() {
        let config = config();
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);
        field.spawn(ObstacleKind::Low, &config);
        // After the 5px advance the trailing edge is below 0 AND the hitbox
        // still overlaps a player whose hitbox pokes past the left edge.
        field.obstacles[0].hitbox.pos.x = -26.0;

        let player = Rect::new(-10.0, config.player_stand_top(), 40.0, config.player_height);
        let step = field.step(0.0, 1.0, &player, &mut rng, &config);
        assert!(step.collided);
        assert_eq!(step.passed, 0);
    }

    #[test]
    fn test_spawn_gap_shrinks_with_difficulty() {
        let config = config();
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);

        // At multiplier 1.0 a 1500 ms gap is too short to spawn
        field.step(1500.0, 1.0, &distant_player(), &mut rng, &config);
        assert!(field.is_empty());

        // At multiplier 1.4 the threshold is ~1428 ms, so the same gap spawns
        field.step(1500.0, 1.4, &distant_player(), &mut rng, &config);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_rng_kind_selection_is_deterministic() {
        let config = config();
        let mut a = ObstacleField::new();
        let mut b = ObstacleField::new();
        let mut rng_a = Pcg32::seed_from_u64(42);
        let mut rng_b = Pcg32::seed_from_u64(42);

        for i in 1..=10 {
            let now = i as f64 * 3000.0;
            a.step(now, 1.0, &distant_player(), &mut rng_a, &config);
            b.step(now, 1.0, &distant_player(), &mut rng_b, &config);
        }
        let kinds_a: Vec<_> = a.obstacles().iter().map(|o| o.kind).collect();
        let kinds_b: Vec<_> = b.obstacles().iter().map(|o| o.kind).collect();
        assert_eq!(kinds_a, kinds_b);
        assert!(!kinds_a.is_empty());
    }
}
