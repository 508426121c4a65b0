pub mod components;
pub mod config;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod stage;
pub mod systems;
pub mod timer;

pub use components::*;
pub use config::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;
pub use stage::*;
pub use timer::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one display frame stamped `now_ms`
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    now_ms: f64,
    config: &Config,
    stage: Stage,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    time.advance(now_ms);

    // Clear events at start of frame
    events.clear();

    // 1. Player paddle follows held input
    move_player_paddles(world, config);

    // 2. Opponent re-aims (at reaction boundaries) and chases its aim
    update_opponents(world, time, config, stage, rng, events);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, stage, rng, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create the keyboard-driven paddle on the right
pub fn create_player_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(Side::Right, config.centred_paddle_y()),
        PaddleIntent::new(),
    ))
}

/// Helper to create the computer paddle on the left, first reaction due at `now_ms`
pub fn create_opponent_paddle(world: &mut World, config: &Config, now_ms: f64) -> hecs::Entity {
    let y = config.centred_paddle_y();
    world.spawn((Paddle::new(Side::Left, y), OpponentAim::new(y, now_ms)))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
