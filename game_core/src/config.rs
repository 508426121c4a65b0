use crate::{Params, Side};
use thiserror::Error;

/// Reasons a surface cannot host a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("surface must be finite and positive, got {width}x{height}")]
    NonPositiveSurface { width: f32, height: f32 },

    #[error("paddle height {paddle_height} does not fit a surface {height} tall")]
    PaddleDoesNotFit { paddle_height: f32, height: f32 },

    #[error("surface {width} wide leaves no room between the paddles")]
    ArenaTooNarrow { width: f32 },
}

/// Game configuration, derived from the drawing surface size
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub margin: f32,
    pub ball_radius: f32,
    pub base_speed: f32,
    pub speed_increment: f32,
    pub rebound_noise: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::derive(Params::SURFACE_WIDTH, Params::SURFACE_HEIGHT)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the geometry for a `width` x `height` surface, rejecting
    /// surfaces a match cannot be played on.
    pub fn for_surface(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::NonPositiveSurface { width, height });
        }

        let config = Self::derive(width, height);

        if config.paddle_height <= 0.0 || config.paddle_height >= height {
            return Err(ConfigError::PaddleDoesNotFit {
                paddle_height: config.paddle_height,
                height,
            });
        }
        if config.opponent_face_x() >= config.paddle_x(Side::Right) {
            return Err(ConfigError::ArenaTooNarrow { width });
        }

        Ok(config)
    }

    fn derive(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paddle_width: (width * Params::PADDLE_WIDTH_FRACTION)
                .round()
                .max(Params::PADDLE_WIDTH_MIN),
            paddle_height: (height * Params::PADDLE_HEIGHT_FRACTION).round(),
            margin: (width * Params::MARGIN_FRACTION).round(),
            ball_radius: (width.min(height) * Params::BALL_RADIUS_FRACTION)
                .round()
                .max(Params::BALL_RADIUS_MIN),
            base_speed: (height * Params::BASE_SPEED_FRACTION)
                .round()
                .max(Params::BASE_SPEED_MIN),
            speed_increment: Params::SPEED_INCREMENT,
            rebound_noise: Params::REBOUND_NOISE,
        }
    }

    /// Left edge of the paddle guarding `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.margin,
            Side::Right => self.width - self.margin - self.paddle_width,
        }
    }

    fn opponent_face_x(&self) -> f32 {
        self.paddle_x(Side::Left) + self.paddle_width
    }

    /// Top of a paddle resting at the vertical centre
    pub fn centred_paddle_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height - self.paddle_height)
    }

    /// How far past an edge the ball centre must travel before a point is scored
    pub fn overshoot(&self) -> f32 {
        self.ball_radius * Params::OVERSHOOT_RADII
    }

    pub fn serve_speed(&self) -> f32 {
        self.base_speed + self.speed_increment
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
