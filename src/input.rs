//! Discrete input events
//!
//! The host translates browser events into [`InputEvent`]s; the simulation
//! never sees raw DOM types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value; unknown keys yield `None`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Up),
            "s" | "S" | "ArrowDown" => Some(Direction::Down),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit vector in canvas space (+y down)
    pub fn unit(&self) -> DVec2 {
        match self {
            Direction::Up => DVec2::new(0.0, -1.0),
            Direction::Down => DVec2::new(0.0, 1.0),
            Direction::Left => DVec2::new(-1.0, 0.0),
            Direction::Right => DVec2::new(1.0, 0.0),
        }
    }
}

/// Input events delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Direction),
    KeyUp(Direction),
    /// Pointer click in arena coordinates
    Fire { x: f64, y: f64 },
}

/// Currently held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Record a press/release. Returns true if the held set changed.
    pub fn set(&mut self, dir: Direction, held: bool) -> bool {
        let slot = match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        std::mem::replace(slot, held) != held
    }

    /// Sum of held unit directions scaled by `speed`.
    ///
    /// Not normalized: diagonals are faster by sqrt(2), opposite keys cancel.
    pub fn velocity(&self, speed: f64) -> DVec2 {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .iter()
        .filter(|(held, _)| *held)
        .map(|(_, dir)| dir.unit())
        .sum::<DVec2>()
            * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Direction::from_key("w"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("D"), Some(Direction::Right));
        assert_eq!(Direction::from_key("q"), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let keys = HeldKeys {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(keys.velocity(5.0), DVec2::new(5.0, -5.0));
        assert!((keys.velocity(5.0).length() - 5.0 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let keys = HeldKeys {
            left: true,
            right: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(keys.velocity(5.0), DVec2::new(0.0, 5.0));
    }

    #[test]
    fn test_set_reports_changes() {
        let mut keys = HeldKeys::default();
        assert!(keys.set(Direction::Up, true));
        assert!(!keys.set(Direction::Up, true)); // key repeat
        assert!(keys.set(Direction::Up, false));
        assert_eq!(keys, HeldKeys::default());
    }
}
