//! Game state and core simulation types
//!
//! Everything the tick mutates lives in one [`GameState`]; there are no
//! globals, so a state can be driven headless in tests.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::enemy::Enemy;
use super::player::Player;
use super::projectile::Projectile;
use super::spawner::Spawner;
use crate::input::{HeldKeys, InputEvent};
use crate::settings::Settings;

/// Something notable that happened during a tick or event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { enemy_id: u32, pos: DVec2 },
    ProjectileFired { projectile_id: u32 },
    /// One entry per projectile that scored
    EnemiesDestroyed { projectile_id: u32, count: u32 },
    ProjectileCulled { projectile_id: u32 },
    PlayerKilled { enemy_id: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    pub player: Player,
    /// Live shots in firing order
    pub projectiles: Vec<Projectile>,
    /// Orbs in spawn order
    pub enemies: Vec<Enemy>,
    /// Kills (one per scoring projectile)
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub held_keys: HeldKeys,
    pub spawner: Spawner,
    pub settings: Settings,
    next_id: u32,
}

impl GameState {
    /// Fresh game: player centered, no orbs, score zero
    pub fn new(settings: Settings, seed: u64) -> Self {
        let arena = Arena::new(settings.arena_width, settings.arena_height);
        Self {
            seed,
            arena,
            player: Player::new(arena.center(), settings.player_radius),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            time_ticks: 0,
            held_keys: HeldKeys::default(),
            spawner: Spawner::new(seed, settings.spawn_period_ticks()),
            settings,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        !self.player.is_alive()
    }

    /// Spawn one orb at a random arena point. No-op once the game is over.
    pub fn spawn_enemy(&mut self) -> Option<GameEvent> {
        if self.is_over() {
            return None;
        }
        let pos = self.spawner.next_position(&self.arena);
        Some(self.spawn_enemy_at(pos))
    }

    /// Spawn one orb at a fixed position
    pub fn spawn_enemy_at(&mut self, pos: DVec2) -> GameEvent {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(
            id,
            pos,
            self.settings.enemy_radius,
            self.settings.enemy_speed,
        ));
        log::debug!("Enemy {} spawned at ({:.1}, {:.1})", id, pos.x, pos.y);
        GameEvent::EnemySpawned { enemy_id: id, pos }
    }

    /// Fire a shot from the player's current position toward `target`
    pub fn fire_at(&mut self, target: DVec2) -> GameEvent {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile::aimed(
            id,
            self.player.pos(),
            target,
            self.settings.projectile_speed,
            self.settings.projectile_radius,
        ));
        GameEvent::ProjectileFired { projectile_id: id }
    }

    /// Apply one input event. Ignored after game over.
    pub fn apply_input(&mut self, event: InputEvent) -> Option<GameEvent> {
        if self.is_over() {
            return None;
        }
        match event {
            InputEvent::KeyDown(dir) | InputEvent::KeyUp(dir) => {
                let held = matches!(event, InputEvent::KeyDown(_));
                if self.held_keys.set(dir, held) {
                    self.player.body.vel = self.held_keys.velocity(self.settings.player_speed);
                }
                None
            }
            InputEvent::Fire { x, y } => Some(self.fire_at(DVec2::new(x, y))),
        }
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            score: self.score,
            player_alive: self.player.is_alive(),
            player: self.player.pos(),
            enemies: self.enemies.iter().map(|e| e.body.pos).collect(),
            projectiles: self.projectiles.iter().map(|p| p.body.pos).collect(),
        }
    }
}

/// Positions-only summary of a [`GameState`] (logging, debugging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub score: u64,
    pub player_alive: bool,
    pub player: DVec2,
    pub enemies: Vec<DVec2>,
    pub projectiles: Vec<DVec2>,
}
