/// Game tuning parameters for the Pong panel
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 450.0;

    // Paddle (fractions of the surface, in whole pixels)
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.015;
    pub const PADDLE_WIDTH_MIN: f32 = 8.0;
    pub const PADDLE_HEIGHT_FRACTION: f32 = 0.22;
    pub const MARGIN_FRACTION: f32 = 0.03;

    // Ball
    pub const BALL_RADIUS_FRACTION: f32 = 0.015;
    pub const BALL_RADIUS_MIN: f32 = 5.0;
    pub const BASE_SPEED_FRACTION: f32 = 0.012; // of height, pixels per frame
    pub const BASE_SPEED_MIN: f32 = 5.0;
    pub const SPEED_INCREMENT: f32 = 0.35; // Added on every paddle hit
    pub const SERVE_SLOPE: f32 = 0.3;
    pub const DEFLECTION_LIMIT: f32 = 1.2; // |dy| <= speed * limit after a hit
    pub const REBOUND_NOISE: f32 = 0.25; // Opponent returns only
    pub const OVERSHOOT_RADII: f32 = 2.0; // Ball must clear the edge by this many radii

    // Opponent
    pub const MISTAKE_SPEED_FACTOR: f32 = 0.5;
    pub const MISTAKE_JITTER_SCALE: f32 = 4.0;
    pub const MISTAKE_OFFSET: f32 = 50.0;
    pub const HESITATION_SPEED_RATIO: f32 = 1.6;
    pub const HESITATION_MS: f64 = 30.0;

    // Net
    pub const NET_DASH: f32 = 8.0;
    pub const NET_GAP: f32 = 12.0;
    pub const NET_LINE_WIDTH: f32 = 2.0;
}
