use crate::{Ball, Config, Events, GameRng, OpponentAim, Paddle, Params, Stage, Time};
use hecs::World;

/// Drive opponent paddles: re-aim at reaction boundaries, chase the aim every frame
pub fn update_opponents(
    world: &mut World,
    time: &Time,
    config: &Config,
    stage: Stage,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return,
    };
    let tuning = stage.config();
    let now = time.now_ms;

    for (_entity, (paddle, aim)) in world.query_mut::<(&mut Paddle, &mut OpponentAim)>() {
        if aim.reaction.fire(now) {
            react(aim, &ball, time, config, stage, rng);
            events.opponent_reacted = true;
        }

        let mut max_step = config.base_speed * tuning.opponent_speed_multiplier;
        if aim.in_mistake(now) {
            max_step *= Params::MISTAKE_SPEED_FACTOR;
        }

        let delta = (aim.aimed_target_y - paddle.y).clamp(-max_step, max_step);
        paddle.y = config.clamp_paddle_y(paddle.y + delta);
    }
}

/// Pick a new aim and schedule the next reaction
fn react(
    aim: &mut OpponentAim,
    ball: &Ball,
    time: &Time,
    config: &Config,
    stage: Stage,
    rng: &mut GameRng,
) {
    let tuning = stage.config();
    let now = time.now_ms;

    aim.aimed_target_y =
        ball.pos.y - config.paddle_height / 2.0 + rng.signed_unit() * tuning.aim_jitter_px;
    aim.reaction.schedule(now + tuning.reaction_interval_ms);

    if rng.chance(tuning.mistake_probability) {
        aim.mistake_until_ms = now + tuning.mistake_duration_ms;
        let spread = tuning.aim_jitter_px * Params::MISTAKE_JITTER_SCALE + Params::MISTAKE_OFFSET;
        aim.aimed_target_y += rng.signed_unit() * spread;
        log::trace!(
            "frame {}: opponent lapse until {:.0}ms",
            time.frame,
            aim.mistake_until_ms
        );
    }

    // Fast balls make it hesitate
    if ball.vel.length() > config.base_speed * Params::HESITATION_SPEED_RATIO {
        aim.reaction.postpone(Params::HESITATION_MS);
    }

    log::trace!(
        "frame {}: opponent aims at {:.1}, next reaction {:?}",
        time.frame,
        aim.aimed_target_y,
        aim.next_reaction_ms()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_opponent_paddle};
    use glam::Vec2;

    fn setup(ball_pos: Vec2, ball_vel: Vec2) -> (World, Config, hecs::Entity) {
        let mut world = World::new();
        let config = Config::new();
        let opponent = create_opponent_paddle(&mut world, &config, 0.0);
        create_ball(&mut world, ball_pos, ball_vel);
        (world, config, opponent)
    }

    fn aim_of(world: &World, entity: hecs::Entity) -> OpponentAim {
        (*world.get::<&OpponentAim>(entity).expect("aim")).clone()
    }

    #[test]
    fn test_first_frame_reacts() {
        let (mut world, config, opponent) = setup(Vec2::new(400.0, 100.0), Vec2::new(-5.0, 0.0));
        let mut rng = GameRng::new(3);
        let mut events = Events::new();

        update_opponents(
            &mut world,
            &Time::new(0.0),
            &config,
            Stage::Hard,
            &mut rng,
            &mut events,
        );

        assert!(events.opponent_reacted);
        let aim = aim_of(&world, opponent);
        let ideal = 100.0 - config.paddle_height / 2.0;
        let widest = Stage::Hard.config().aim_jitter_px
            * (1.0 + Params::MISTAKE_JITTER_SCALE)
            + Params::MISTAKE_OFFSET;
        assert!((aim.aimed_target_y - ideal).abs() <= widest);
        assert!(aim.next_reaction_ms().expect("rescheduled") >= 80.0);
    }

    #[test]
    fn test_aim_constant_between_reactions() {
        let (mut world, config, opponent) = setup(Vec2::new(400.0, 100.0), Vec2::new(-5.0, 2.0));
        let mut rng = GameRng::new(11);
        let mut events = Events::new();
        let stage = Stage::Easy;

        let mut now = 0.0;
        update_opponents(&mut world, &Time::new(now), &config, stage, &mut rng, &mut events);
        let aim = aim_of(&world, opponent);
        let next = aim.next_reaction_ms().expect("scheduled");

        while now + 16.0 < next {
            now += 16.0;
            for (_e, ball) in world.query_mut::<&mut Ball>() {
                ball.pos.y += 7.0;
            }
            events.clear();
            update_opponents(&mut world, &Time::new(now), &config, stage, &mut rng, &mut events);
            assert!(!events.opponent_reacted);
            assert_eq!(aim_of(&world, opponent).aimed_target_y, aim.aimed_target_y);
        }

        update_opponents(&mut world, &Time::new(next), &config, stage, &mut rng, &mut events);
        assert!(events.opponent_reacted, "Should react once the deadline passes");
    }

    #[test]
    fn test_paddle_speed_is_capped() {
        let (mut world, config, opponent) = setup(Vec2::new(400.0, 440.0), Vec2::new(-5.0, 0.0));
        let mut rng = GameRng::new(5);
        let mut events = Events::new();
        let start = world.get::<&Paddle>(opponent).expect("paddle").y;

        update_opponents(
            &mut world,
            &Time::new(0.0),
            &config,
            Stage::Medium,
            &mut rng,
            &mut events,
        );

        let moved = world.get::<&Paddle>(opponent).expect("paddle").y - start;
        let cap = config.base_speed * Stage::Medium.config().opponent_speed_multiplier;
        assert!(moved.abs() <= cap + 1e-4, "moved {moved}, cap {cap}");
    }

    #[test]
    fn test_mistake_window_halves_speed() {
        let (mut world, config, opponent) = setup(Vec2::new(400.0, 440.0), Vec2::new(-5.0, 0.0));
        let mut rng = GameRng::new(5);
        let mut events = Events::new();
        {
            let mut aim = world.get::<&mut OpponentAim>(opponent).expect("aim");
            aim.reaction.schedule(10_000.0);
            aim.aimed_target_y = config.height;
            aim.mistake_until_ms = 500.0;
        }
        let start = world.get::<&Paddle>(opponent).expect("paddle").y;

        update_opponents(
            &mut world,
            &Time::new(100.0),
            &config,
            Stage::Hard,
            &mut rng,
            &mut events,
        );

        let moved = world.get::<&Paddle>(opponent).expect("paddle").y - start;
        let full = config.base_speed * Stage::Hard.config().opponent_speed_multiplier;
        assert!((moved - full * Params::MISTAKE_SPEED_FACTOR).abs() < 1e-4);
    }

    #[test]
    fn test_reactions_sometimes_lapse() {
        let (mut world, config, opponent) = setup(Vec2::new(400.0, 225.0), Vec2::new(-5.0, 0.0));
        let mut rng = GameRng::new(1);
        let mut events = Events::new();
        let stage = Stage::Easy;
        let tuning = stage.config();
        let ideal = 225.0 - config.paddle_height / 2.0;
        let spread =
            tuning.aim_jitter_px * Params::MISTAKE_JITTER_SCALE + Params::MISTAKE_OFFSET;

        let mut reactions = 0u32;
        let mut lapses = 0u32;
        let mut widest_lapse = 0.0f32;
        for frame in 0..20_000u32 {
            let now = frame as f64 * 1000.0 / 60.0;
            let before = aim_of(&world, opponent).mistake_until_ms;
            events.clear();
            update_opponents(&mut world, &Time::new(now), &config, stage, &mut rng, &mut events);
            if !events.opponent_reacted {
                continue;
            }
            reactions += 1;

            let aim = aim_of(&world, opponent);
            let offset = (aim.aimed_target_y - ideal).abs();
            if aim.mistake_until_ms != before {
                lapses += 1;
                assert_eq!(aim.mistake_until_ms, now + tuning.mistake_duration_ms);
                assert!(offset <= tuning.aim_jitter_px + spread + 1e-3);
                widest_lapse = widest_lapse.max(offset);
            } else {
                assert!(offset <= tuning.aim_jitter_px + 1e-3, "offset {offset} without a lapse");
            }
        }

        assert!(reactions > 1000, "only {reactions} reactions");
        assert!(lapses > 0, "no lapses in {reactions} reactions");
        let rate = lapses as f64 / reactions as f64;
        assert!(
            (rate - tuning.mistake_probability).abs() < 0.04,
            "lapse rate {rate:.3} vs {}",
            tuning.mistake_probability
        );
        assert!(
            widest_lapse > tuning.aim_jitter_px,
            "lapses should aim wider than plain jitter"
        );
    }

    #[test]
    fn test_fast_ball_delays_reaction() {
        let fast = Vec2::new(-20.0, 0.0);
        let (mut world, config, opponent) = setup(Vec2::new(400.0, 200.0), fast);
        let mut rng = GameRng::new(9);
        let mut events = Events::new();

        update_opponents(
            &mut world,
            &Time::new(0.0),
            &config,
            Stage::Hard,
            &mut rng,
            &mut events,
        );

        let next = aim_of(&world, opponent).next_reaction_ms().expect("scheduled");
        assert_eq!(
            next,
            Stage::Hard.config().reaction_interval_ms + Params::HESITATION_MS
        );
    }

    #[test]
    fn test_no_ball_is_a_no_op() {
        let mut world = World::new();
        let config = Config::new();
        let opponent = create_opponent_paddle(&mut world, &config, 0.0);
        let mut events = Events::new();

        update_opponents(
            &mut world,
            &Time::new(0.0),
            &config,
            Stage::Easy,
            &mut GameRng::default(),
            &mut events,
        );

        assert!(!events.opponent_reacted);
        assert!(aim_of(&world, opponent).reaction.is_pending());
    }
}
