//! Difficulty presets for the opponent and the ball speed cap

/// Tuning record selected by a [`Stage`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageConfig {
    pub opponent_speed_multiplier: f32,
    pub reaction_interval_ms: f64,
    pub aim_jitter_px: f32,
    pub mistake_probability: f64,
    pub mistake_duration_ms: f64,
    pub max_ball_speed_multiplier: f32,
}

const STAGES: [StageConfig; 3] = [
    StageConfig {
        opponent_speed_multiplier: 0.65,
        reaction_interval_ms: 140.0,
        aim_jitter_px: 28.0,
        mistake_probability: 0.12,
        mistake_duration_ms: 550.0,
        max_ball_speed_multiplier: 1.7,
    },
    StageConfig {
        opponent_speed_multiplier: 0.85,
        reaction_interval_ms: 100.0,
        aim_jitter_px: 14.0,
        mistake_probability: 0.08,
        mistake_duration_ms: 450.0,
        max_ball_speed_multiplier: 1.9,
    },
    StageConfig {
        opponent_speed_multiplier: 1.05,
        reaction_interval_ms: 80.0,
        aim_jitter_px: 8.0,
        mistake_probability: 0.05,
        mistake_duration_ms: 380.0,
        max_ball_speed_multiplier: 2.0,
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Easy, Stage::Medium, Stage::Hard];

    /// Map a host-supplied level onto a stage, clamping to 1..=3
    pub fn from_level(level: i32) -> Self {
        match level {
            i32::MIN..=1 => Stage::Easy,
            2 => Stage::Medium,
            _ => Stage::Hard,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Stage::Easy => 1,
            Stage::Medium => 2,
            Stage::Hard => 3,
        }
    }

    pub fn config(self) -> &'static StageConfig {
        &STAGES[usize::from(self.level() - 1)]
    }

    /// Fastest the ball may travel on this stage
    pub fn max_ball_speed(self, base_speed: f32) -> f32 {
        base_speed * self.config().max_ball_speed_multiplier
    }
}
