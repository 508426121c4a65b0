use hecs::{Entity, World};

use crate::{
    create_ball, create_opponent_paddle, create_player_paddle, draw_frame, step, Ball, Config,
    Direction, Events, GameRng, OpponentAim, Paddle, PaddleIntent, RenderTarget, Score, Stage,
    Time,
};

/// One Pong panel: the player on the right, the computer on the left
///
/// All match state lives here. Constructing a session is the only
/// initialization step, so there is nothing to guard against running twice.
pub struct PongSession {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub stage: Stage,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub player: Entity,
    pub opponent: Entity,
    pub ball: Entity,
}

impl PongSession {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();
        let time = Time::default();

        let player = create_player_paddle(&mut world, &config);
        let opponent = create_opponent_paddle(&mut world, &config, time.now_ms);

        let mut ball = Ball::new(config.center(), glam::Vec2::ZERO);
        ball.serve(rng.coin_side(), &config, &mut rng);
        let ball = create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            time,
            config,
            stage: Stage::default(),
            score: Score::new(),
            events: Events::new(),
            rng,
            player,
            opponent,
            ball,
        }
    }

    /// Run one display frame
    pub fn tick(&mut self, now_ms: f64) -> &Events {
        step(
            &mut self.world,
            &mut self.time,
            now_ms,
            &self.config,
            self.stage,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        &self.events
    }

    /// Zero the score, centre both paddles and serve a fresh rally
    pub fn reset_match(&mut self) {
        self.score = Score::new();
        let centred = self.config.centred_paddle_y();
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = centred;
        }
        self.serve_random();
        log::info!("match reset on stage {}", self.stage.level());
    }

    /// Switch difficulty, clamping `level` to 1..=3. The rally restarts; the
    /// score does not.
    pub fn set_stage(&mut self, level: i32) {
        self.stage = Stage::from_level(level);
        self.serve_random();
        log::info!("stage set to {}", self.stage.level());
    }

    /// D-pad hold: one direction at a time
    pub fn hold(&mut self, dir: Direction) {
        if let Ok(mut intent) = self.world.get::<&mut PaddleIntent>(self.player) {
            intent.hold(dir);
        }
    }

    pub fn release(&mut self) {
        if let Ok(mut intent) = self.world.get::<&mut PaddleIntent>(self.player) {
            intent.release();
        }
    }

    /// Returns false for keys the panel does not handle
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(dir) = Direction::from_key(key) else {
            return false;
        };
        if let Ok(mut intent) = self.world.get::<&mut PaddleIntent>(self.player) {
            intent.press(dir);
        }
        true
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        let Some(dir) = Direction::from_key(key) else {
            return false;
        };
        if let Ok(mut intent) = self.world.get::<&mut PaddleIntent>(self.player) {
            intent.lift(dir);
        }
        true
    }

    pub fn ball_state(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.player).ok().map(|p| *p)
    }

    pub fn opponent_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.opponent).ok().map(|p| *p)
    }

    pub fn opponent_aim(&self) -> Option<OpponentAim> {
        self.world
            .get::<&OpponentAim>(self.opponent)
            .ok()
            .map(|aim| (*aim).clone())
    }

    pub fn score_text(&self) -> String {
        self.score.label()
    }

    pub fn stage_text(&self) -> String {
        format!("Stage: {}", self.stage.level())
    }

    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        let paddles: Vec<Paddle> = [self.opponent_paddle(), self.player_paddle()]
            .into_iter()
            .flatten()
            .collect();
        let ball = self.ball_state();
        draw_frame(target, &self.config, &paddles, ball.as_ref());
    }

    fn serve_random(&mut self) {
        let toward = self.rng.coin_side();
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.serve(toward, &self.config, &mut self.rng);
            log::debug!("served toward {:?}", toward);
        }
    }
}
