//! Projectiles and their owning pool

use glam::Vec2;

use super::entity::{Aabb, Entity};
use crate::consts::*;
use crate::heading_to_vec;
use crate::platform::{SpriteId, Surface};

/// Short-lived kinetic entity fired by the player ship
#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vec2,
    pub size: Vec2,
    /// Travel heading in degrees
    pub heading: f32,
    pub speed: f32,
    /// Remaining ticks before the pool prunes this projectile
    pub lifetime_ticks: u32,
}

impl Projectile {
    pub fn new(position: Vec2, size: Vec2, heading: f32) -> Self {
        Self {
            position,
            size,
            heading,
            speed: PROJECTILE_SPEED,
            lifetime_ticks: PROJECTILE_LIFETIME_TICKS,
        }
    }

    /// True until the lifetime expires or a collision kills it
    pub fn is_live(&self) -> bool {
        self.lifetime_ticks > 0
    }

    /// Logical kill. Physical removal happens at the pool's next prune, so a
    /// projectile killed mid-pass still occupies its slot this tick.
    /// Idempotent.
    pub fn kill(&mut self) {
        self.lifetime_ticks = 0;
    }
}

impl Entity for Projectile {
    fn update(&mut self) {
        self.position += heading_to_vec(self.heading) * self.speed;
        self.lifetime_ticks = self.lifetime_ticks.saturating_sub(1);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.blit(SpriteId::Projectile, self.position, self.size, self.heading);
    }

    fn collider(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

/// Owning collection of the player's live projectiles.
///
/// Tick ordering within one simulation step is fixed: advance every
/// projectile, prune all with zero lifetime, and only then does the asteroid
/// field's collision pass run against the surviving list. A projectile killed
/// by that pass stays in the list (lifetime zero, skipped by later checks)
/// until the next tick's prune.
#[derive(Debug, Default)]
pub struct ProjectilePool {
    projectiles: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, position: Vec2, size: Vec2, heading: f32) {
        self.projectiles.push(Projectile::new(position, size, heading));
    }

    /// Advance all, then prune all expired
    pub fn tick(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles.retain(|p| p.is_live());
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for projectile in &self.projectiles {
            projectile.draw(surface);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.projectiles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
