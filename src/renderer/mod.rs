//! Rendering module
//!
//! The game only ever draws filled circles and text, so rendering goes
//! through a tiny [`Surface`] trait. The browser backs it with a 2D canvas;
//! tests and the native build record the commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{draw_frame, draw_game_over};

use glam::DVec2;

use crate::sim::{Arena, Color};

/// A render target accepting primitive draw commands
pub trait Surface {
    /// Wipe the whole arena
    fn clear(&mut self, arena: &Arena);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
    fn fill_text(&mut self, text: &str, pos: DVec2, font_px: f64, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        pos: DVec2,
        font_px: f64,
        color: Color,
    },
}

/// Surface that stores commands instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the commands recorded so far
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All text drawn so far, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _arena: &Arena) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: DVec2, font_px: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font_px,
            color,
        });
    }
}
