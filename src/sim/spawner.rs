//! Periodic enemy spawner
//!
//! The browser drives spawns from its own interval timer via
//! [`GameState::spawn_enemy`](super::GameState::spawn_enemy). Hosts without a
//! second timer can instead call [`Spawner::advance`] once per tick.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::arena::Arena;

/// Seeded spawn-position source plus an optional tick accumulator
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    /// Spawn period in ticks (for tick-driven hosts)
    period_ticks: u32,
    /// Ticks since the last tick-driven spawn
    elapsed_ticks: u32,
    /// Total enemies produced
    pub spawned: u64,
}

impl Spawner {
    pub fn new(seed: u64, period_ticks: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            period_ticks: period_ticks.max(1),
            elapsed_ticks: 0,
            spawned: 0,
        }
    }

    /// Pick the next spawn point, uniform in the arena
    pub fn next_position(&mut self, arena: &Arena) -> DVec2 {
        self.spawned += 1;
        arena.random_point(&mut self.rng)
    }

    /// Count one tick; returns true when a spawn is due
    pub fn advance(&mut self) -> bool {
        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.period_ticks {
            self.elapsed_ticks = 0;
            true
        } else {
            false
        }
    }
}
