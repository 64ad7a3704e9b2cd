//! HTML canvas 2D backend

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use super::Surface;
use crate::sim::{Arena, Color};

/// Draws onto a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, arena: &Arena) {
        self.ctx.clear_rect(0.0, 0.0, arena.width, arena.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: DVec2, font_px: f64, color: Color) {
        self.ctx.set_font(&format!("{}px Arial", font_px));
        self.ctx.set_fill_style_str(color.as_css());
        if let Err(e) = self.ctx.fill_text(text, pos.x, pos.y) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
