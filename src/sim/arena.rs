//! Rectangular play area
//!
//! Origin is the top-left corner, +y points down (canvas coordinates).

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The arena rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a circle center so the whole circle stays inside the arena
    pub fn clamp_circle(&self, pos: DVec2, radius: f64) -> DVec2 {
        let mut p = pos;
        if p.x - radius < 0.0 {
            p.x = radius;
        }
        if p.x + radius > self.width {
            p.x = self.width - radius;
        }
        if p.y - radius < 0.0 {
            p.y = radius;
        }
        if p.y + radius > self.height {
            p.y = self.height - radius;
        }
        p
    }

    /// True once the whole circle lies past any edge
    pub fn circle_fully_outside(&self, pos: DVec2, radius: f64) -> bool {
        pos.x + radius < 0.0
            || pos.x - radius > self.width
            || pos.y + radius < 0.0
            || pos.y - radius > self.height
    }

    /// Uniform random point in `[0, width) x [0, height)`
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        DVec2::new(
            rng.random::<f64>() * self.width,
            rng.random::<f64>() * self.height,
        )
    }
}
