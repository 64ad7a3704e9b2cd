//! Scene composition: which primitives make up a frame

use glam::DVec2;

use super::Surface;
use crate::consts::{GAME_OVER_FONT_PX, SCORE_FONT_PX};
use crate::sim::{Body, Color, GameState};

fn fill_body(surface: &mut dyn Surface, body: &Body) {
    surface.fill_circle(body.pos, body.radius(), body.color);
}

/// Clear and draw the live scene plus the score HUD.
///
/// Called before the tick, so entities appear at their pre-move positions.
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear(&state.arena);

    if state.player.is_alive() {
        fill_body(surface, &state.player.body);
    }
    for projectile in &state.projectiles {
        fill_body(surface, &projectile.body);
    }
    for enemy in state.enemies.iter().filter(|e| e.alive) {
        fill_body(surface, &enemy.body);
    }

    surface.fill_text(
        &format!("Score: {}", state.score),
        DVec2::new(10.0, 30.0),
        SCORE_FONT_PX,
        Color::Black,
    );
}

/// Draw the game-over overlay on top of whatever is on screen.
///
/// Depends only on the arena and the frozen score, so repeated calls draw
/// the same thing.
pub fn draw_game_over(state: &GameState, surface: &mut dyn Surface) {
    let center = state.arena.center();
    surface.fill_text(
        "Game Over",
        DVec2::new(center.x - 100.0, center.y),
        GAME_OVER_FONT_PX,
        Color::Red,
    );
    surface.fill_text(
        &format!("Final Score: {}", state.score),
        DVec2::new(center.x - 120.0, center.y + 50.0),
        GAME_OVER_FONT_PX,
        Color::Red,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;

    #[test]
    fn test_frame_draw_order() {
        let mut state = GameState::new(Settings::default(), 1);
        state.spawn_enemy_at(DVec2::new(50.0, 50.0));
        state.fire_at(DVec2::new(0.0, 300.0));
        state.score = 7;

        let mut surface = RecordingSurface::new();
        draw_frame(&state, &mut surface);

        let cmds = surface.drain();
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[0], DrawCommand::Clear);
        assert!(matches!(cmds[1], DrawCommand::Circle { color: Color::Blue, radius, .. } if radius == 30.0));
        assert!(matches!(cmds[2], DrawCommand::Circle { color: Color::Red, .. }));
        assert!(matches!(cmds[3], DrawCommand::Circle { color: Color::Green, .. }));
        assert_eq!(
            cmds[4],
            DrawCommand::Text {
                text: "Score: 7".to_string(),
                pos: DVec2::new(10.0, 30.0),
                font_px: 30.0,
                color: Color::Black,
            }
        );
    }

    #[test]
    fn test_game_over_overlay_layout() {
        let mut state = GameState::new(Settings::default(), 1);
        state.score = 3;
        let mut surface = RecordingSurface::new();
        draw_game_over(&state, &mut surface);
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Text {
                    text: "Game Over".to_string(),
                    pos: DVec2::new(300.0, 300.0),
                    font_px: 50.0,
                    color: Color::Red,
                },
                DrawCommand::Text {
                    text: "Final Score: 3".to_string(),
                    pos: DVec2::new(280.0, 350.0),
                    font_px: 50.0,
                    color: Color::Red,
                },
            ]
        );
    }
}
