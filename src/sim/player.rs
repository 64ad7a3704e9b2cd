//! The player's circle

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::entity::{Body, Color};

/// Player-controlled circle, confined to the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    alive: bool,
}

impl Player {
    pub fn new(pos: DVec2, radius: f64) -> Self {
        Self {
            body: Body::new(pos, radius, Color::Blue),
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.body.pos
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.body.radius()
    }

    /// Terminal transition; later calls are no-ops.
    /// Returns true only on the call that actually killed the player.
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }

    /// Integrate and clamp so the whole circle stays in bounds
    pub fn update(&mut self, arena: &Arena) {
        if !self.alive {
            return;
        }
        self.body.integrate();
        self.body.pos = arena.clamp_circle(self.body.pos, self.body.radius());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_clamps_to_arena() {
        let arena = Arena::new(800.0, 600.0);
        let mut player = Player::new(DVec2::new(35.0, 35.0), 30.0);
        player.body.vel = DVec2::new(-5.0, -5.0);
        for _ in 0..10 {
            player.update(&arena);
        }
        assert_eq!(player.pos(), DVec2::new(30.0, 30.0));
    }

    #[test]
    fn test_kill_is_one_way() {
        let mut player = Player::new(DVec2::ZERO, 30.0);
        assert!(player.kill());
        assert!(!player.kill());
        assert!(!player.is_alive());
    }

    #[test]
    fn test_dead_player_does_not_move() {
        let arena = Arena::new(800.0, 600.0);
        let mut player = Player::new(DVec2::new(400.0, 300.0), 30.0);
        player.body.vel = DVec2::new(5.0, 0.0);
        player.kill();
        player.update(&arena);
        assert_eq!(player.pos(), DVec2::new(400.0, 300.0));
    }
}
