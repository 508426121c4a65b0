use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply held-direction input to player paddles
pub fn move_player_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let delta = intent.dir() * config.base_speed;
        if delta != 0.0 {
            paddle.y = config.clamp_paddle_y(paddle.y + delta);
        }
    }
}

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
