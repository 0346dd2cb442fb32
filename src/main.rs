//! Rockstorm entry point
//!
//! Wires the simulation core to headless platform backends and runs the
//! fixed-tick loop with a small autopilot, so the binary exercises the whole
//! game without a window backend.

use std::time::Duration;

use glam::Vec2;

use rockstorm::consts::*;
use rockstorm::platform::{Event, FrameClock, InputState, NullAudio, NullSurface, SpawnTimer};
use rockstorm::sim::{AsteroidVariant, Entity, GameConfig, GamePhase, GameSession};

fn main() {
    env_logger::init();

    let config = GameConfig {
        viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        seed: rand::random(),
        high_score_path: "high_score.txt".into(),
    };
    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut surface = NullSurface::default();
    let mut audio = NullAudio::default();
    let mut clock = FrameClock::new(TICK_HZ);
    let mut spawn_timer = SpawnTimer::new(Duration::from_millis(ASTEROID_SPAWN_INTERVAL_MS));

    log::info!("starting run, best so far {}", session.best_score());

    let mut tick: u64 = 0;
    loop {
        while let Some(event) = spawn_timer.poll() {
            match event {
                Event::Quit => return,
                Event::SpawnTick => session.handle_event(event),
            }
        }

        let input = autopilot(&session, tick);
        session.advance(&input, &mut audio);
        session.draw(&mut surface);

        if session.phase == GamePhase::GameOver {
            log::info!(
                "final score {}, best {}{}",
                session.score,
                session.best_score(),
                if session.is_new_high_score() {
                    " (new high score!)"
                } else {
                    ""
                }
            );
            break;
        }

        tick += 1;
        clock.wait();
    }
}

/// Synthesize one tick of input: rotate toward the nearest live asteroid,
/// thrust in bursts to chase it, hold fire.
fn autopilot(session: &GameSession, tick: u64) -> InputState {
    let player = &session.player;
    let ship_center = player.collider().center();

    let target = session
        .field
        .asteroids()
        .iter()
        .filter(|a| !a.exploded && a.variant == AsteroidVariant::Normal)
        .min_by(|a, b| {
            let da = (a.collider().center() - ship_center).length_squared();
            let db = (b.collider().center() - ship_center).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut input = InputState {
        fire: true,
        ..Default::default()
    };

    if let Some(asteroid) = target {
        let to_target = asteroid.collider().center() - ship_center;
        // Forward axis is facing + 90 in screen space
        let desired = (-to_target.y).atan2(to_target.x).to_degrees() - 90.0;
        let mut delta = (desired - player.facing).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        if delta > PLAYER_ROTATION_SPEED {
            input.rotate_left = true;
        } else if delta < -PLAYER_ROTATION_SPEED {
            input.rotate_right = true;
        } else {
            // Lined up: nudge forward in short bursts
            input.thrust = tick % 30 < 6;
        }
    }

    input
}
