//! Game session: per-tick orchestration, phase transitions, score, and reset

use std::path::PathBuf;

use glam::Vec2;
use thiserror::Error;

use super::asteroid::AsteroidField;
use super::entity::Entity;
use super::player::PlayerShip;
use crate::consts::*;
use crate::highscores::HighScoreStore;
use crate::platform::{AudioSink, Event, InputState, SpriteId, Surface};

/// Smallest viewport that leaves room for the spawn clearance around the ship
const MIN_VIEWPORT_AXIS: f32 = 200.0;

/// Construction-time configuration errors. These are fatal; the session
/// refuses to build rather than limping along with bad settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewport {0}x{1} too small, each axis must be at least {MIN_VIEWPORT_AXIS}")]
    ViewportTooSmall(f32, f32),
    #[error("high score path is empty")]
    EmptyHighScorePath,
}

/// Everything the simulation core needs from the outside world at
/// construction time. No process-wide globals.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub viewport: Vec2,
    pub seed: u64,
    pub high_score_path: PathBuf,
}

impl GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.x < MIN_VIEWPORT_AXIS || self.viewport.y < MIN_VIEWPORT_AXIS {
            return Err(ConfigError::ViewportTooSmall(
                self.viewport.x,
                self.viewport.y,
            ));
        }
        if self.high_score_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyHighScorePath);
        }
        Ok(())
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Run ended; simulation frozen until an external reset request
    GameOver,
}

/// One run of the game: the player, the asteroid field, score, and the
/// phase machine tying them together.
pub struct GameSession {
    pub player: PlayerShip,
    pub field: AsteroidField,
    pub score: u32,
    pub phase: GamePhase,
    config: GameConfig,
    high_scores: HighScoreStore,
    /// Set by the UI's retry action, consumed at the top of the next tick
    reset_requested: bool,
    new_high_score: bool,
    run_index: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let high_scores = HighScoreStore::load(&config.high_score_path);
        Ok(Self {
            player: PlayerShip::new(config.viewport),
            field: AsteroidField::new(config.viewport, config.seed),
            score: 0,
            phase: GamePhase::Playing,
            config,
            high_scores,
            reset_requested: false,
            new_high_score: false,
            run_index: 0,
        })
    }

    /// Consume one backend event. `Quit` is handled by the owning loop;
    /// it is accepted here as a no-op so callers can forward everything.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::SpawnTick => {
                if self.phase == GamePhase::Playing && self.field.len() < MAX_ASTEROIDS {
                    self.field.spawn(&self.player);
                }
            }
            Event::Quit => {}
        }
    }

    /// Ask for a full reset. Takes effect at the start of the next
    /// `advance` call, from any phase.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Advance the session one fixed tick: input, player, field, score,
    /// drift damage, game-over check. Frozen while in `GameOver`.
    pub fn advance(&mut self, input: &InputState, audio: &mut dyn AudioSink) {
        if self.reset_requested {
            self.reset();
        }
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.player.apply_input(input, audio);
        self.player.update();
        self.score += self.field.tick(&mut self.player, audio);

        // Deep space is not an escape hatch
        if self.player.is_out_of_bounds() {
            self.player.take_damage();
        }

        if self.player.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.new_high_score = self.high_scores.record(self.score);
            log::info!(
                "game over: score {}, best {}",
                self.score,
                self.high_scores.best()
            );
        }
    }

    fn reset(&mut self) {
        self.run_index += 1;
        // Fresh asteroid sequence per retry, still deterministic per config
        let seed = self.config.seed.wrapping_add(self.run_index);
        self.player = PlayerShip::new(self.config.viewport);
        self.field = AsteroidField::new(self.config.viewport, seed);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.new_high_score = false;
        self.reset_requested = false;
        log::info!("session reset, run {}", self.run_index);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.player.draw(surface);
        self.field.draw(surface);

        match self.phase {
            GamePhase::Playing => {
                let icon_size = Vec2::new(20.0, 30.0);
                for i in 0..self.player.lives {
                    let pos = Vec2::new(10.0 + i as f32 * 35.0, 110.0);
                    surface.blit(SpriteId::LifeIcon, pos, icon_size, 0.0);
                }
            }
            GamePhase::GameOver => {
                let center = self.config.viewport * 0.5;
                let banner = Vec2::new(400.0, 120.0);
                surface.blit(
                    SpriteId::GameOverBanner,
                    center - banner * 0.5,
                    banner,
                    0.0,
                );
                if self.new_high_score {
                    let ribbon = Vec2::new(300.0, 60.0);
                    surface.blit(
                        SpriteId::NewHighScoreBanner,
                        Vec2::new(center.x - ribbon.x * 0.5, center.y + 80.0),
                        ribbon,
                        0.0,
                    );
                }
            }
        }
    }

    pub fn best_score(&self) -> u32 {
        self.high_scores.best()
    }

    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }
}
