//! Collider geometry and the entity capability contract
//!
//! Every gameplay object is a concrete type implementing `Entity`; there is
//! no base-class hierarchy. The shared contract is small: advance one tick,
//! draw, and expose an axis-aligned collider kept in sync with position and
//! size.

use glam::Vec2;

use crate::platform::Surface;

/// Axis-aligned bounding box used for all intersection tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Strict overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.position.x < other.position.x + other.size.x
            && other.position.x < self.position.x + self.size.x
            && self.position.y < other.position.y + other.size.y
            && other.position.y < self.position.y + self.size.y
    }

    /// True when the box has fully left the viewport on either axis
    pub fn fully_outside(&self, viewport: Vec2) -> bool {
        self.position.x + self.size.x < 0.0
            || self.position.x > viewport.x
            || self.position.y + self.size.y < 0.0
            || self.position.y > viewport.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

/// Capability contract shared by the player, projectiles, and asteroids.
///
/// Invariant: after `update()`, `collider()` matches the entity's current
/// position and size.
pub trait Entity {
    /// Advance internal state by one tick
    fn update(&mut self);

    /// Pure rendering side effect, no state mutation
    fn draw(&self, surface: &mut dyn Surface);

    fn collider(&self) -> Aabb;

    fn intersects(&self, other: &dyn Entity) -> bool {
        self.collider().overlaps(&other.collider())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_hit() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_overlap_miss() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_fully_outside() {
        let viewport = Vec2::new(1000.0, 800.0);

        // Left edge: box ends just before x = 0
        let gone = Aabb::new(Vec2::new(-20.0, 100.0), Vec2::new(10.0, 10.0));
        assert!(gone.fully_outside(viewport));

        // Straddling the edge still counts as inside
        let straddling = Aabb::new(Vec2::new(-5.0, 100.0), Vec2::new(10.0, 10.0));
        assert!(!straddling.fully_outside(viewport));

        // Past the right edge
        let east = Aabb::new(Vec2::new(1000.5, 100.0), Vec2::new(10.0, 10.0));
        assert!(east.fully_outside(viewport));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_box_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let a = Aabb::new(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(a.overlaps(&a));
        }
    }
}
