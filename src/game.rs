//! Frame driver
//!
//! Owns the [`GameState`] and turns the three host event sources (refresh
//! frames, the spawn timer, input) into state changes and draw calls.

use crate::input::{Direction, InputEvent};
use crate::renderer::{Surface, draw_frame, draw_game_over};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule another frame
    Running,
    /// Player is dead; stop scheduling frames
    GameOver,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    /// Spawn from the tick counter instead of an external timer
    tick_spawning: bool,
    overlay_drawn: bool,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(settings, seed),
            tick_spawning: false,
            overlay_drawn: false,
        }
    }

    /// Drive spawns from the frame loop (hosts without an interval timer)
    pub fn with_tick_spawning(mut self) -> Self {
        self.tick_spawning = true;
        self
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Spawn timer callback
    pub fn on_spawn_timer(&mut self) {
        self.state.spawn_enemy();
    }

    pub fn on_input(&mut self, event: InputEvent) {
        if let Some(GameEvent::ProjectileFired { projectile_id }) = self.state.apply_input(event) {
            log::debug!("Projectile {} fired", projectile_id);
        }
    }

    /// Keyboard callback; keys that are not movement keys are ignored
    pub fn on_key(&mut self, key: &str, down: bool) {
        if let Some(dir) = Direction::from_key(key) {
            let event = if down {
                InputEvent::KeyDown(dir)
            } else {
                InputEvent::KeyUp(dir)
            };
            self.on_input(event);
        }
    }

    pub fn on_click(&mut self, x: f64, y: f64) {
        self.on_input(InputEvent::Fire { x, y });
    }

    /// Run one display-refresh frame: draw, then advance the simulation.
    ///
    /// Once the player is dead the world is left untouched and the overlay is
    /// drawn on top of the last frame (only the first time).
    pub fn frame(&mut self, surface: &mut dyn Surface) -> FrameStatus {
        if self.state.is_over() {
            if !self.overlay_drawn {
                draw_game_over(&self.state, surface);
                self.overlay_drawn = true;
            }
            return FrameStatus::GameOver;
        }

        if self.tick_spawning && self.state.spawner.advance() {
            self.state.spawn_enemy();
        }

        draw_frame(&self.state, surface);
        for event in tick(&mut self.state) {
            if let GameEvent::PlayerKilled { .. } = event {
                log::info!("Game over - final score {}", self.state.score);
            }
        }
        FrameStatus::Running
    }

    /// Draw the overlay again (e.g. after the host repaints)
    pub fn redraw_game_over(&self, surface: &mut dyn Surface) {
        if self.state.is_over() {
            draw_game_over(&self.state, surface);
        }
    }
}
