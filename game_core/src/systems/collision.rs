use crate::{Ball, Events, Paddle, Rect};
use hecs::World;

/// Reverse the ball for every paddle it currently overlaps.
///
/// There is no cooldown: a ball that stays inside a paddle for several
/// ticks reverses on each of them.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    let paddles: Vec<(crate::Side, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect()))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect();
        for (side, paddle_rect) in &paddles {
            if ball_rect.intersects(paddle_rect) {
                log::trace!("Ball touched {:?} paddle", side);
                ball.collide();
                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, HorizontalDir, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let world = World::new();
        let config = Config::new();
        let events = Events::new();
        (world, config, events)
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let ball = create_ball(&mut world, &config);
        {
            let mut ball = world.get::<&mut Ball>(ball).unwrap();
            ball.pos = Vec2::new(45.0, 300.0); // rect 37..53 overlaps paddle 30..40
            ball.x_dir = HorizontalDir::Backward;
        }

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(
            world.get::<&Ball>(ball).unwrap().x_dir,
            HorizontalDir::Forward,
            "Ball should bounce right after hitting left paddle"
        );
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        let ball = create_ball(&mut world, &config);
        world.get::<&mut Ball>(ball).unwrap().pos = Vec2::new(775.0, 280.0);

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(
            world.get::<&Ball>(ball).unwrap().x_dir,
            HorizontalDir::Backward,
            "Ball should bounce left after hitting right paddle"
        );
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_touching_paddle_edge_is_not_a_hit() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        let ball = create_ball(&mut world, &config);
        // Ball rect ends at x = 780, exactly where the paddle starts
        world.get::<&mut Ball>(ball).unwrap().pos = Vec2::new(772.0, 300.0);

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(
            world.get::<&Ball>(ball).unwrap().x_dir,
            HorizontalDir::Forward
        );
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_missing_paddle_vertically() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let ball = create_ball(&mut world, &config);
        // Paddle spans 275..365; ball rect spans 365..381
        world.get::<&mut Ball>(ball).unwrap().pos = Vec2::new(35.0, 373.0);

        check_paddle_collisions(&mut world, &mut events);

        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_overlap_retriggers_every_call() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let ball = create_ball(&mut world, &config);
        world.get::<&mut Ball>(ball).unwrap().pos = Vec2::new(35.0, 300.0);

        check_paddle_collisions(&mut world, &mut events);
        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(
            world.get::<&Ball>(ball).unwrap().x_dir,
            HorizontalDir::Forward,
            "Two overlapping ticks flip the ball twice"
        );
    }
}
