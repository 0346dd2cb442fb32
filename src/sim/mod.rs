//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (list order, mutations deferred past each pass)
//! - No platform dependencies beyond the trait boundary

pub mod asteroid;
pub mod entity;
pub mod player;
pub mod projectile;
pub mod session;

pub use asteroid::{Asteroid, AsteroidField, AsteroidVariant};
pub use entity::{Aabb, Entity};
pub use player::PlayerShip;
pub use projectile::{Projectile, ProjectilePool};
pub use session::{ConfigError, GameConfig, GamePhase, GameSession};
