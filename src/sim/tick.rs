//! Fixed-step simulation tick
//!
//! One call advances the world by one display refresh. Update order is fixed:
//! player, then each projectile (move, cull, collide), then each enemy
//! (home, move, contact). Removals are only recorded during the scan and
//! applied in a compaction pass at the end, so no entity is skipped or
//! visited twice.

use super::collision::resolve_shot;
use super::state::{GameEvent, GameState};

/// Advance the game state by one tick.
///
/// Does nothing once the player is dead. Returns the events of this tick.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    state.time_ticks += 1;

    state.player.update(&state.arena);

    // Projectiles to drop after the scan
    let mut spent: Vec<u32> = Vec::new();

    for projectile in &mut state.projectiles {
        projectile.update();

        if projectile.is_off_arena(&state.arena) {
            spent.push(projectile.id);
            events.push(GameEvent::ProjectileCulled {
                projectile_id: projectile.id,
            });
            continue;
        }

        let killed = resolve_shot(&projectile.body, &mut state.enemies);
        if !killed.is_empty() {
            spent.push(projectile.id);
            state.score += 1;
            log::debug!(
                "Projectile {} destroyed enemies {:?} (score {})",
                projectile.id,
                killed,
                state.score
            );
            events.push(GameEvent::EnemiesDestroyed {
                projectile_id: projectile.id,
                count: killed.len() as u32,
            });
        }
    }

    // Enemies home on where the player is now
    let player_pos = state.player.pos();
    let player_radius = state.player.radius();
    for enemy in &mut state.enemies {
        if enemy.update(player_pos, player_radius) && state.player.kill() {
            log::info!(
                "Player caught by enemy {} at tick {} - final score {}",
                enemy.id,
                state.time_ticks,
                state.score
            );
            events.push(GameEvent::PlayerKilled { enemy_id: enemy.id });
        }
    }

    // Compaction
    if !spent.is_empty() {
        state.projectiles.retain(|p| !spent.contains(&p.id));
    }
    state.enemies.retain(|e| e.alive);

    events
}
