//! Homing orbs
//!
//! Pure pursuit: every tick the orb re-aims at the player's current position
//! and moves a fixed distance toward it. No prediction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Color};
use crate::heading;

/// A homing enemy orb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    /// Cleared when shot; dead orbs are skipped and compacted at tick end
    pub alive: bool,
    /// Movement per tick
    pub speed: f64,
}

impl Enemy {
    pub fn new(id: u32, pos: DVec2, radius: f64, speed: f64) -> Self {
        Self {
            id,
            body: Body::new(pos, radius, Color::Green),
            alive: true,
            speed,
        }
    }

    /// Re-aim at the player, move, and report whether the orb now touches them
    pub fn update(&mut self, player_pos: DVec2, player_radius: f64) -> bool {
        if !self.alive {
            return false;
        }
        self.body.vel = heading(self.body.pos, player_pos) * self.speed;
        self.body.integrate();

        self.body.pos.distance(player_pos) < self.body.radius() + player_radius
    }
}
