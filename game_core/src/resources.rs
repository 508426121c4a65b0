use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now_ms: f64, // Host timestamp of the current frame
    pub frame: u64,  // Frames stepped so far
}

impl Time {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms, frame: 0 }
    }

    pub fn advance(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        self.frame += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the point to whoever did not concede
    pub fn concede(&mut self, side: Side) {
        match side {
            Side::Left => self.player += 1,
            Side::Right => self.opponent += 1,
        }
    }

    pub fn label(&self) -> String {
        format!("Player: {} - AI: {}", self.player, self.opponent)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Uniform in [-1, 1]
    pub fn signed_unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen_range(-1.0..=1.0)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        use rand::Rng;
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }

    pub fn coin_side(&mut self) -> Side {
        if self.chance(0.5) {
            Side::Right
        } else {
            Side::Left
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub opponent_reacted: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.opponent_reacted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concede_left_credits_player() {
        let mut score = Score::new();
        score.concede(Side::Left);
        score.concede(Side::Left);
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 0);
    }

    #[test]
    fn test_concede_right_credits_opponent() {
        let mut score = Score::new();
        score.concede(Side::Right);
        assert_eq!(score.player, 0);
        assert_eq!(score.opponent, 1);
    }

    #[test]
    fn test_score_label() {
        let score = Score {
            player: 3,
            opponent: 1,
        };
        assert_eq!(score.label(), "Player: 3 - AI: 1");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.opponent_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.opponent_reacted = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.opponent_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.opponent_reacted);
    }

    #[test]
    fn test_signed_unit_bounds() {
        let mut rng = GameRng::new(1);
        for _ in 0..1000 {
            let v = rng.signed_unit();
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::new(0.0);
        time.advance(16.7);
        time.advance(33.4);
        assert_eq!(time.frame, 2);
        assert_eq!(time.now_ms, 33.4);
    }
}
