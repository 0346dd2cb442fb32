//! Player ship: input-driven movement, shooting, and the damage state machine

use glam::Vec2;

use super::entity::{Aabb, Entity};
use super::projectile::ProjectilePool;
use crate::consts::*;
use crate::heading_to_vec;
use crate::platform::{AudioSink, InputState, Sound, SpriteId, Surface};

/// The player-controlled ship. Owns the projectile pool its shots live in.
#[derive(Debug)]
pub struct PlayerShip {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    /// Facing in degrees; the sprite's forward axis is `facing + 90`
    pub facing: f32,
    pub velocity: Vec2,
    pub lives: u32,
    pub shoot_cooldown: u32,
    pub invincibility_ticks: u32,
    /// Flicker flag while invincible; always true otherwise
    pub blink_visible: bool,
    pub projectiles: ProjectilePool,
    viewport: Vec2,
}

impl PlayerShip {
    pub fn new(viewport: Vec2) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            position: (viewport - size) * 0.5,
            size,
            facing: 0.0,
            velocity: Vec2::ZERO,
            lives: PLAYER_LIVES,
            shoot_cooldown: 0,
            invincibility_ticks: 0,
            blink_visible: true,
            projectiles: ProjectilePool::new(),
            viewport,
        }
    }

    /// Apply one tick's input snapshot: rotation, thrust, fire.
    ///
    /// Thrust only applies while the current speed is below the cap; a ship
    /// already moving faster keeps coasting but cannot accelerate further.
    pub fn apply_input(&mut self, input: &InputState, audio: &mut dyn AudioSink) {
        if input.rotate_left {
            self.facing += PLAYER_ROTATION_SPEED;
        }
        if input.rotate_right {
            self.facing -= PLAYER_ROTATION_SPEED;
        }

        if input.thrust && self.velocity.length_squared() < PLAYER_MAX_SPEED * PLAYER_MAX_SPEED {
            self.velocity += heading_to_vec(self.facing + 90.0) * PLAYER_THRUST_ACCEL;
        }

        if input.fire {
            self.shoot(audio);
        }
    }

    /// Fire one projectile from the ship's center along its forward axis.
    /// No-op while the cooldown is running.
    pub fn shoot(&mut self, audio: &mut dyn AudioSink) {
        if self.shoot_cooldown > 0 {
            return;
        }
        let size = Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT);
        let center = self.collider().center() - size * 0.5;
        self.projectiles.spawn(center, size, self.facing + 90.0);
        audio.play(Sound::Shoot);
        self.shoot_cooldown = SHOOT_COOLDOWN_TICKS;
    }

    /// Intake for any damage source. Ignored while invincible or already out
    /// of lives; otherwise costs a life, recenters the ship, and arms the
    /// invincibility window.
    pub fn take_damage(&mut self) {
        if self.invincibility_ticks > 0 || self.lives == 0 {
            return;
        }
        self.lives -= 1;
        log::info!("player hit, {} lives left", self.lives);
        self.position = (self.viewport - self.size) * 0.5;
        self.velocity = Vec2::ZERO;
        self.facing = 0.0;
        self.invincibility_ticks = INVINCIBILITY_TICKS;
        self.blink_visible = true;
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_ticks > 0
    }

    /// True once the ship has drifted more than the damage margin past any
    /// viewport edge
    pub fn is_out_of_bounds(&self) -> bool {
        self.position.x < -DRIFT_DAMAGE_MARGIN
            || self.position.x > self.viewport.x + DRIFT_DAMAGE_MARGIN
            || self.position.y < -DRIFT_DAMAGE_MARGIN
            || self.position.y > self.viewport.y + DRIFT_DAMAGE_MARGIN
    }
}

impl Entity for PlayerShip {
    fn update(&mut self) {
        self.position += self.velocity;
        self.velocity *= PLAYER_DRAG;

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);

        if self.invincibility_ticks > 0 {
            self.invincibility_ticks -= 1;
            if self.invincibility_ticks == 0 {
                self.blink_visible = true;
            } else if self.invincibility_ticks % BLINK_INTERVAL_TICKS == 0 {
                self.blink_visible = !self.blink_visible;
            }
        }

        self.projectiles.tick();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if self.blink_visible {
            surface.blit(SpriteId::Ship, self.position, self.size, self.facing);
        }
        self.projectiles.draw(surface);
    }

    fn collider(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}
