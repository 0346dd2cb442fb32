//! Rockstorm - an Asteroids-style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game session)
//! - `platform`: Render/audio/input/timing boundary with headless backends
//! - `highscores`: Single-scalar file-backed high score

pub mod highscores;
pub mod platform;
pub mod sim;

pub use highscores::HighScoreStore;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions in pixels
    pub const VIEWPORT_WIDTH: f32 = 1000.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;

    /// Fixed simulation rate (one tick = one frame)
    pub const TICK_HZ: u32 = 60;

    /// Player ship defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Rotation per held rotate key, degrees per tick
    pub const PLAYER_ROTATION_SPEED: f32 = 5.0;
    /// Thrust acceleration, pixels per tick squared
    pub const PLAYER_THRUST_ACCEL: f32 = 0.2;
    /// Speed ceiling for applying new thrust (coasting above it is allowed)
    pub const PLAYER_MAX_SPEED: f32 = 5.0;
    /// Exponential velocity damping applied each tick
    pub const PLAYER_DRAG: f32 = 0.99;
    pub const PLAYER_LIVES: u32 = 3;
    /// Ticks between shots
    pub const SHOOT_COOLDOWN_TICKS: u32 = 10;
    /// Post-damage grace period (3 seconds at 60 Hz)
    pub const INVINCIBILITY_TICKS: u32 = 180;
    /// Ticks per visibility toggle while invincible
    pub const BLINK_INTERVAL_TICKS: u32 = 10;
    /// Distance beyond the viewport at which a drifting ship takes damage
    pub const DRIFT_DAMAGE_MARGIN: f32 = 100.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 6.0;
    pub const PROJECTILE_HEIGHT: f32 = 6.0;
    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const PROJECTILE_LIFETIME_TICKS: u32 = 60;

    /// Asteroid defaults
    pub const ASTEROID_SIZE: f32 = 80.0;
    pub const ASTEROID_MIN_SPEED: f32 = 1.5;
    pub const ASTEROID_MAX_SPEED: f32 = 3.5;
    /// Ticks the explosion sprite stays on screen
    pub const ASTEROID_EXPLOSION_TICKS: u32 = 10;
    /// Minimum per-axis clearance between a fresh asteroid and the player
    pub const ASTEROID_SPAWN_CLEARANCE: f32 = 50.0;
    /// Live-asteroid cap enforced at spawn time
    pub const MAX_ASTEROIDS: usize = 20;
    /// Spawn timer period in milliseconds
    pub const ASTEROID_SPAWN_INTERVAL_MS: u64 = 2000;

    /// Score awarded per confirmed projectile hit
    pub const SCORE_PER_HIT: u32 = 25;
}

/// Unit vector for a heading in degrees, screen-space (y grows downward)
#[inline]
pub fn heading_to_vec(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Unit vector for a heading in radians, screen-space (y grows downward)
#[inline]
pub fn radial_to_vec(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), -radians.sin())
}
