//! Circle overlap tests and projectile/enemy hit resolution
//!
//! Brute force O(projectiles x enemies); arenas hold a few dozen orbs at most.

use glam::DVec2;

use super::enemy::Enemy;
use super::entity::Body;

/// Strict overlap: touching circles do not collide
#[inline]
pub fn circles_overlap(a_pos: DVec2, a_radius: f64, b_pos: DVec2, b_radius: f64) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

#[inline]
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    circles_overlap(a.pos, a.radius(), b.pos, b.radius())
}

/// Kill every live enemy the shot overlaps.
///
/// Enemies already dead (claimed earlier this tick) are skipped, so each
/// orb is destroyed at most once. Returns the ids of the orbs destroyed;
/// a non-empty result means the shot is spent.
pub fn resolve_shot(shot: &Body, enemies: &mut [Enemy]) -> Vec<u32> {
    let mut killed = Vec::new();
    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        if bodies_overlap(shot, &enemy.body) {
            enemy.alive = false;
            killed.push(enemy.id);
        }
    }
    killed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Color;

    fn shot_at(x: f64, y: f64) -> Body {
        Body::new(DVec2::new(x, y), 5.0, Color::Red)
    }

    #[test]
    fn test_touching_is_not_overlap() {
        assert!(!circles_overlap(DVec2::ZERO, 5.0, DVec2::new(35.0, 0.0), 30.0));
        assert!(circles_overlap(DVec2::ZERO, 5.0, DVec2::new(34.9, 0.0), 30.0));
    }

    #[test]
    fn test_one_shot_two_orbs() {
        let mut enemies = vec![
            Enemy::new(1, DVec2::new(110.0, 100.0), 30.0, 1.5),
            Enemy::new(2, DVec2::new(90.0, 100.0), 30.0, 1.5),
            Enemy::new(3, DVec2::new(400.0, 400.0), 30.0, 1.5),
        ];
        let killed = resolve_shot(&shot_at(100.0, 100.0), &mut enemies);
        assert_eq!(killed, vec![1, 2]);
        assert!(!enemies[0].alive);
        assert!(!enemies[1].alive);
        assert!(enemies[2].alive);
    }

    #[test]
    fn test_claimed_orb_not_rechecked() {
        let mut enemies = vec![Enemy::new(1, DVec2::new(100.0, 100.0), 30.0, 1.5)];
        assert_eq!(resolve_shot(&shot_at(100.0, 100.0), &mut enemies), vec![1]);
        assert!(resolve_shot(&shot_at(101.0, 100.0), &mut enemies).is_empty());
    }
}
