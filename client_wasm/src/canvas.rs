//! Canvas 2D implementation of the simulation's render target

use game_core::{Color, RenderTarget};
use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasTarget<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasTarget<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl RenderTarget for CanvasTarget<'_> {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x.into(), pos.y.into(), size.x.into(), size.y.into());
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width.into());
        self.ctx.begin_path();
        self.ctx.move_to(from.x.into(), from.y.into());
        self.ctx.line_to(to.x.into(), to.y.into());
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x.into(),
            center.y.into(),
            radius.into(),
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Failed to trace ball: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}
