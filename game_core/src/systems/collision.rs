use crate::{Ball, Config, Events, GameRng, OpponentAim, Paddle, Params, Side, Stage};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Contact is tested once per frame against the ball's current position, with
/// no swept detection: a ball fast enough to cross a paddle's full depth in one
/// frame can pass through it.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    stage: Stage,
    rng: &mut GameRng,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Paddle, bool)> = world
        .query::<(&Paddle, Option<&OpponentAim>)>()
        .iter()
        .map(|(_e, (paddle, aim))| (*paddle, aim.is_some()))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        for (paddle, is_opponent) in &paddles {
            // Only the opponent's returns are roughened
            let noise_scale = if *is_opponent { config.rebound_noise } else { 0.0 };
            if bounce_off_paddle(ball, paddle, config, stage, noise_scale, rng) {
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}

/// Reflect off the top/bottom edge the ball is moving into
fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let r = config.ball_radius;
    if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + r >= config.height && ball.vel.y > 0.0 {
        ball.pos.y = config.height - r;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Reflect off `paddle` if the ball's leading edge reached its face while
/// travelling toward it. Up to `noise_scale` of random offset is added to the
/// paddle-relative hit position.
fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    stage: Stage,
    noise_scale: f32,
    rng: &mut GameRng,
) -> bool {
    let r = config.ball_radius;
    let paddle_x = config.paddle_x(paddle.side);

    let reached_face = match paddle.side {
        Side::Left => ball.pos.x - r <= paddle_x + config.paddle_width,
        Side::Right => ball.pos.x + r >= paddle_x,
    };
    if !reached_face || !paddle.covers(ball.pos.y, config) || !ball.is_moving_toward(paddle.side)
    {
        return false;
    }

    // Touch the face
    ball.pos.x = match paddle.side {
        Side::Left => paddle_x + config.paddle_width + r,
        Side::Right => paddle_x - r,
    };

    let away = -paddle.side.sign();
    let half_height = config.paddle_height / 2.0;
    let intersect = ((ball.pos.y - paddle.center_y(config)) / half_height).clamp(-1.0, 1.0);
    let noise = if noise_scale > 0.0 {
        rng.signed_unit() * noise_scale
    } else {
        0.0
    };

    let limit = ball.speed * Params::DEFLECTION_LIMIT;
    let dx = away * (ball.vel.x.abs() + config.speed_increment);
    let dy = (ball.speed * (intersect + noise)).clamp(-limit, limit);

    let new_speed =
        (ball.speed + config.speed_increment).min(stage.max_ball_speed(config.base_speed));
    let dir = Vec2::new(dx, dy).normalize_or_zero();
    ball.vel = Vec2::new(away * dir.x.abs(), dir.y) * new_speed;
    ball.resync_speed();

    log::trace!(
        "ball returned by {:?} paddle at {:.2} speed {:.2}",
        paddle.side,
        intersect,
        ball.speed
    );
    true
}
