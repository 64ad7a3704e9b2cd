//! Ballistic shots fired by the player

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::entity::{Body, Color};
use crate::heading;

/// A shot travelling in a straight line until it leaves the arena or hits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
}

impl Projectile {
    /// Fire from `origin` toward `target` at `speed` units per tick
    pub fn aimed(id: u32, origin: DVec2, target: DVec2, speed: f64, radius: f64) -> Self {
        let vel = heading(origin, target) * speed;
        Self {
            id,
            body: Body::new(origin, radius, Color::Red).with_velocity(vel),
        }
    }

    pub fn update(&mut self) {
        self.body.integrate();
    }

    pub fn is_off_arena(&self, arena: &Arena) -> bool {
        arena.circle_fully_outside(self.body.pos, self.body.radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aimed_velocity() {
        let p = Projectile::aimed(1, DVec2::new(400.0, 300.0), DVec2::new(500.0, 300.0), 5.0, 5.0);
        assert_eq!(p.body.pos, DVec2::new(400.0, 300.0));
        assert!((p.body.vel.x - 5.0).abs() < 1e-12);
        assert!(p.body.vel.y.abs() < 1e-12);
    }

    #[test]
    fn test_velocity_is_constant() {
        let mut p = Projectile::aimed(1, DVec2::ZERO, DVec2::new(3.0, 4.0), 5.0, 5.0);
        let vel = p.body.vel;
        for _ in 0..5 {
            p.update();
        }
        assert_eq!(p.body.vel, vel);
        assert!((p.body.pos - DVec2::new(15.0, 20.0)).length() < 1e-9);
    }

    #[test]
    fn test_leaves_arena() {
        let arena = Arena::new(100.0, 100.0);
        let mut p = Projectile::aimed(1, DVec2::new(95.0, 50.0), DVec2::new(200.0, 50.0), 5.0, 5.0);
        assert!(!p.is_off_arena(&arena));
        p.update(); // x = 100
        p.update(); // x = 105, circle just touching
        assert!(!p.is_off_arena(&arena));
        p.update(); // x = 110
        assert!(p.is_off_arena(&arena));
    }
}
