//! Headless autoplay demo
//!
//! Drives the simulation core with synthetic 60 Hz refresh timestamps and a
//! trivial reactive pilot (jump over Low obstacles, duck under High ones).
//! Useful for eyeballing balance and log output without any renderer:
//!
//! ```text
//! RUST_LOG=info horizon-runner [seed] [max-frames]
//! ```

use horizon_runner::{GameEvent, GameLoop, InputIntent, ObstacleKind, Phase, RunnerConfig, Stance};

const FRAME_MS: f64 = 17.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(36_000);

    let mut game = match GameLoop::with_seed(RunnerConfig::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("bad config: {err}");
            std::process::exit(1);
        }
    };
    game.start();

    let mut ts = 0.0;
    let mut ticks = 0u64;
    for _ in 0..max_frames {
        pilot(&mut game);

        ts += FRAME_MS;
        let Some(output) = game.on_frame(ts) else {
            continue;
        };
        ticks += 1;

        for event in &output.events {
            match event {
                GameEvent::Milestone(score) => log::info!("milestone reached: {score}"),
                GameEvent::GameOver(score) => {
                    println!(
                        "game over: score {score}, {ticks} ticks survived, \
                         difficulty {:.1}x",
                        output.snapshot.difficulty
                    );
                }
                _ => {}
            }
        }
        if game.phase() == Phase::Ended {
            return;
        }
    }

    println!("still running after {ticks} ticks, score {}", game.score());
}

/// Reactive evasion: act when the next obstacle is about 12 ticks away
fn pilot(game: &mut GameLoop) {
    let Some(snapshot) = game.snapshot() else {
        return;
    };
    let player = snapshot.player.hitbox;
    let speed = game.config().base_obstacle_speed * snapshot.difficulty;
    let lead = 12.0 * speed;

    let next = snapshot
        .obstacles
        .iter()
        .filter(|o| o.hitbox.right() > player.left())
        .min_by(|a, b| a.hitbox.left().total_cmp(&b.hitbox.left()));

    match next {
        Some(obstacle) if obstacle.hitbox.left() - player.right() < lead => {
            match obstacle.kind {
                ObstacleKind::Low => {
                    if snapshot.player.stance == Stance::Ducking {
                        game.queue_intent(InputIntent::DuckRelease);
                    }
                    game.queue_intent(InputIntent::Jump);
                }
                ObstacleKind::High => game.queue_intent(InputIntent::Duck),
            }
        }
        _ => {
            if snapshot.player.stance == Stance::Ducking {
                game.queue_intent(InputIntent::DuckRelease);
            }
        }
    }
}
