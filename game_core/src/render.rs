//! Frame drawing through an abstract 2D surface
//!
//! The simulation never touches a real canvas. [`draw_frame`] emits the frame
//! as a short list of primitive calls on a [`RenderTarget`], which the browser
//! client implements for `CanvasRenderingContext2d`.

use glam::Vec2;

use crate::{Ball, Config, Paddle, Params};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const NET: Color = Color::rgba(255, 255, 255, 0.35);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Output sink for one frame
pub trait RenderTarget {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Draw background, net, paddles and ball in that order
pub fn draw_frame<T: RenderTarget + ?Sized>(
    target: &mut T,
    config: &Config,
    paddles: &[Paddle],
    ball: Option<&Ball>,
) {
    target.fill_rect(
        Vec2::ZERO,
        Vec2::new(config.width, config.height),
        Color::BLACK,
    );

    draw_net(target, config);

    for paddle in paddles {
        target.fill_rect(
            Vec2::new(config.paddle_x(paddle.side), paddle.y),
            Vec2::new(config.paddle_width, config.paddle_height),
            Color::WHITE,
        );
    }

    if let Some(ball) = ball {
        target.fill_circle(ball.pos, config.ball_radius, Color::WHITE);
    }
}

fn draw_net<T: RenderTarget + ?Sized>(target: &mut T, config: &Config) {
    let x = config.width / 2.0;
    let mut y = 0.0;
    while y < config.height {
        let end = (y + Params::NET_DASH).min(config.height);
        target.stroke_line(
            Vec2::new(x, y),
            Vec2::new(x, end),
            Params::NET_LINE_WIDTH,
            Color::NET,
        );
        y += Params::NET_DASH + Params::NET_GAP;
    }
}
