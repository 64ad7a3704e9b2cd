//! Homing Orbs - a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, homing, collisions, game state)
//! - `input`: Keyboard/pointer events mapped onto the simulation
//! - `renderer`: Draw-command surface abstraction (canvas on the web)
//! - `game`: Frame driver tying ticks, spawn timer, input and rendering together
//! - `settings`: Tunable game parameters

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameStatus, Game};
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Arena size used when the host does not provide one
    pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f64 = 30.0;
    /// Movement per tick along each held axis
    pub const PLAYER_SPEED: f64 = 5.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f64 = 5.0;
    pub const PROJECTILE_SPEED: f64 = 5.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f64 = 30.0;
    pub const ENEMY_SPEED: f64 = 1.5;

    /// Enemy spawn period (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Nominal display refresh, used to convert the spawn period into ticks
    pub const TICKS_PER_SECOND: f64 = 60.0;

    /// HUD layout
    pub const SCORE_FONT_PX: f64 = 30.0;
    pub const GAME_OVER_FONT_PX: f64 = 50.0;
}

/// Unit vector pointing from `from` toward `to`.
///
/// Uses `atan2` so coincident points yield +x rather than NaN.
#[inline]
pub fn heading(from: DVec2, to: DVec2) -> DVec2 {
    let delta = to - from;
    let angle = delta.y.atan2(delta.x);
    DVec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_axis_aligned() {
        let h = heading(DVec2::new(400.0, 300.0), DVec2::new(500.0, 300.0));
        assert!((h.x - 1.0).abs() < 1e-12);
        assert!(h.y.abs() < 1e-12);
    }

    #[test]
    fn test_heading_coincident_points() {
        let p = DVec2::new(10.0, 10.0);
        assert_eq!(heading(p, p), DVec2::new(1.0, 0.0));
    }
}
