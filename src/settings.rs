//! Game settings
//!
//! Every tunable has a default in [`crate::consts`]. Hosts may override any
//! subset with a JSON object (missing fields keep their defaults).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,

    // === Player ===
    pub player_radius: f64,
    /// Units per tick along each held axis
    pub player_speed: f64,

    // === Projectiles ===
    pub projectile_radius: f64,
    pub projectile_speed: f64,

    // === Enemies ===
    pub enemy_radius: f64,
    pub enemy_speed: f64,
    pub spawn_interval_ms: f64,

    /// Fixed RNG seed; `None` means the host picks one (clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,

            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON and sanitize the result
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            Some(json) => match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded settings: {:?}", settings);
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings JSON ({}), using defaults", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Arena size override (browser window size)
    pub fn with_arena(mut self, width: f64, height: f64) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self.sanitized()
    }

    /// Replace non-finite or non-positive values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: &mut f64, default: f64, name: &str| {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Setting {} = {} is invalid, using {}", name, value, default);
                *value = default;
            }
        };
        fix(&mut self.arena_width, defaults.arena_width, "arena_width");
        fix(&mut self.arena_height, defaults.arena_height, "arena_height");
        fix(&mut self.player_radius, defaults.player_radius, "player_radius");
        fix(&mut self.player_speed, defaults.player_speed, "player_speed");
        fix(&mut self.projectile_radius, defaults.projectile_radius, "projectile_radius");
        fix(&mut self.projectile_speed, defaults.projectile_speed, "projectile_speed");
        fix(&mut self.enemy_radius, defaults.enemy_radius, "enemy_radius");
        fix(&mut self.enemy_speed, defaults.enemy_speed, "enemy_speed");
        fix(&mut self.spawn_interval_ms, defaults.spawn_interval_ms, "spawn_interval_ms");

        // The player must fit inside the arena or clamping pushes it off an edge
        let min_side = 2.0 * self.player_radius;
        for (value, name) in [
            (&mut self.arena_width, "arena_width"),
            (&mut self.arena_height, "arena_height"),
        ] {
            if *value < min_side {
                log::warn!(
                    "Setting {} = {} is smaller than the player, using {}",
                    name,
                    value,
                    min_side
                );
                *value = min_side;
            }
        }
        self
    }

    /// Spawn period expressed in nominal refresh ticks (at least one)
    pub fn spawn_period_ticks(&self) -> u32 {
        ((self.spawn_interval_ms / 1000.0 * TICKS_PER_SECOND).round() as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"enemy_speed": 2.0, "seed": 9}"#).unwrap();
        assert_eq!(settings.enemy_speed, 2.0);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.player_radius, PLAYER_RADIUS);
        assert_eq!(settings.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_invalid_values_are_replaced() {
        let settings = Settings::from_json(r#"{"arena_width": -1, "enemy_radius": 0}"#).unwrap();
        assert_eq!(settings.arena_width, DEFAULT_ARENA_WIDTH);
        assert_eq!(settings.enemy_radius, ENEMY_RADIUS);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert!(Settings::from_json("{not json").is_err());
        assert_eq!(Settings::from_json_or_default(Some("{not json")), Settings::default());
        assert_eq!(Settings::from_json_or_default(Some("  ")), Settings::default());
        assert_eq!(Settings::from_json_or_default(None), Settings::default());
    }

    #[test]
    fn test_arena_grows_to_fit_player() {
        let settings = Settings::default().with_arena(800.0, 40.0);
        assert_eq!(settings.arena_width, 800.0);
        assert_eq!(settings.arena_height, 2.0 * PLAYER_RADIUS);

        let settings = Settings::from_json(r#"{"arena_width": 10, "player_radius": 12}"#).unwrap();
        assert_eq!(settings.arena_width, 24.0);
    }

    #[test]
    fn test_zero_arena_uses_defaults() {
        let settings = Settings::default().with_arena(0.0, 0.0);
        assert_eq!(settings.arena_width, DEFAULT_ARENA_WIDTH);
        assert_eq!(settings.arena_height, DEFAULT_ARENA_HEIGHT);
    }

    #[test]
    fn test_spawn_period_ticks() {
        assert_eq!(Settings::default().spawn_period_ticks(), 60);
        let fast = Settings {
            spawn_interval_ms: 1.0,
            ..Default::default()
        };
        assert_eq!(fast.spawn_period_ticks(), 1);
    }
}
