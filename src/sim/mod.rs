//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only (velocities are units per tick)
//! - Seeded RNG only
//! - Stable iteration order (insertion order, removals compacted after the scan)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod projectile;
pub mod spawner;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{bodies_overlap, circles_overlap, resolve_shot};
pub use enemy::Enemy;
pub use entity::{Body, Color};
pub use player::Player;
pub use projectile::Projectile;
pub use spawner::Spawner;
pub use state::{GameEvent, GameState, Snapshot};
pub use tick::tick;
