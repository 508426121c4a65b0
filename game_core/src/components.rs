use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng, Params, Timer};

/// Which wall a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // Opponent
    Right, // Player
}

impl Side {
    /// Horizontal sign of travel toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to [0, height - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    pub fn covers(&self, y: f32, config: &Config) -> bool {
        y >= self.y && y <= self.y + config.paddle_height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32, // Always |vel|
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
        }
    }

    pub fn resync_speed(&mut self) {
        self.speed = self.vel.length();
    }

    pub fn is_moving_toward(&self, side: Side) -> bool {
        self.vel.x * side.sign() > 0.0
    }

    /// Put the ball back in the centre heading toward `toward`
    pub fn serve(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        self.pos = config.center();

        let slope: f32 = rng.0.gen_range(-Params::SERVE_SLOPE..=Params::SERVE_SLOPE);
        let speed = config.serve_speed();
        self.vel = Vec2::new(toward.sign(), slope).normalize() * speed;
        self.speed = speed;

        debug_assert!(
            (self.vel.length() - self.speed).abs() < 1e-3,
            "served ball speed out of sync with velocity"
        );
    }
}

/// Held direction for a player-controlled paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// D-pad name as sent by the host page
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "UP" | "up" => Some(Direction::Up),
            "DOWN" | "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Keyboard key name. Only the arrow keys: letters belong to text fields
    /// elsewhere on the page.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Movement intent for a player paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1 = up, 0 = stop, 1 = down
    pub fn dir(&self) -> f32 {
        f32::from(i8::from(self.down) - i8::from(self.up))
    }

    /// Key edge: the direction stays held until its own key is released
    pub fn press(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
        }
    }

    pub fn lift(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.up = false,
            Direction::Down => self.down = false,
        }
    }

    /// D-pad hold: one direction at a time
    pub fn hold(&mut self, dir: Direction) {
        self.up = dir == Direction::Up;
        self.down = dir == Direction::Down;
    }

    pub fn release(&mut self) {
        self.up = false;
        self.down = false;
    }
}

/// Opponent aim state, recomputed only at reaction boundaries
#[derive(Debug, Clone)]
pub struct OpponentAim {
    pub aimed_target_y: f32,
    pub reaction: Timer,
    pub mistake_until_ms: f64,
}

impl OpponentAim {
    /// Aim at the paddle's current position, first reaction due at `now_ms`
    pub fn new(paddle_y: f32, now_ms: f64) -> Self {
        Self {
            aimed_target_y: paddle_y,
            reaction: Timer::scheduled_at(now_ms),
            mistake_until_ms: 0.0,
        }
    }

    pub fn next_reaction_ms(&self) -> Option<f64> {
        self.reaction.deadline()
    }

    pub fn in_mistake(&self, now_ms: f64) -> bool {
        now_ms < self.mistake_until_ms
    }
}
