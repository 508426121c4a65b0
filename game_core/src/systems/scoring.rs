use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring), then serve toward the side that conceded
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let overshoot = config.overshoot();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let conceded = if ball.pos.x < -overshoot {
            Side::Left
        } else if ball.pos.x > config.width + overshoot {
            Side::Right
        } else {
            continue;
        };

        score.concede(conceded);
        match conceded {
            Side::Left => events.player_scored = true,
            Side::Right => events.opponent_scored = true,
        }
        log::debug!("{:?} side conceded, score {}", conceded, score.label());

        ball.serve(conceded, config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (World::new(), Config::new(), Score::new(), Events::new(), rng)
    }

    fn ball_of(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball")
    }

    #[test]
    fn test_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let x = -config.overshoot() - 0.5;
        create_ball(&mut world, Vec2::new(x, 200.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.opponent, 0, "Opponent should not score");
        assert!(events.player_scored);
        assert!(ball_of(&world).vel.x < 0.0, "Serve should head to the opponent");
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let x = config.width + config.overshoot() + 0.5;
        create_ball(&mut world, Vec2::new(x, 200.0), Vec2::new(6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.opponent, 1, "Opponent should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.opponent_scored);
        assert!(ball_of(&world).vel.x > 0.0, "Serve should head to the player");
    }

    #[test]
    fn test_no_scoring_within_overshoot_margin() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 200.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "Ball just past the edge is still live");
        assert!(!events.player_scored && !events.opponent_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-100.0, 50.0), Vec2::new(-9.0, 3.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let ball = ball_of(&world);
        assert_eq!(ball.pos, config.center(), "Ball should reset to center");
        assert!((ball.speed - config.serve_speed()).abs() < 1e-5);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();

        for _ in 0..3 {
            create_ball(&mut world, Vec2::new(-100.0, 200.0), Vec2::new(-6.0, 0.0));
            check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
            world.clear();
            events.clear();
        }

        assert_eq!(score.player, 3, "Scores should accumulate");
        assert_eq!(score.opponent, 0);
    }
}
