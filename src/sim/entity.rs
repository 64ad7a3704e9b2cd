//! Shared circle shape for every moving thing in the arena

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Player
    Blue,
    /// Projectiles, game-over text
    Red,
    /// Enemies
    Green,
    /// HUD text
    Black,
}

impl Color {
    /// CSS color name for canvas fill styles
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Black => "black",
        }
    }
}

/// A filled circle with a per-tick velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    /// Displacement applied once per tick
    pub vel: DVec2,
    radius: f64,
    pub color: Color,
}

impl Body {
    pub fn new(pos: DVec2, radius: f64, color: Color) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius,
            color,
        }
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    /// Radius is fixed at construction
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Advance one fixed tick
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.pos.distance(other.pos)
    }
}
