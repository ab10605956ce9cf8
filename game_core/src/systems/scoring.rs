use crate::{Arena, Ball, Events, Paddle, Side};
use hecs::World;

/// Award a point when the ball crosses a goal line, then serve again.
///
/// The ball's crossing guard makes sure one crossing scores once.
pub fn check_scoring(world: &mut World, arena: &Arena, events: &mut Events) {
    let mut scorers = Vec::new();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = ball.goal_outcome(arena).scorer() {
            scorers.push(side);
            ball.reset(arena);
            log::debug!(
                "Ball reset to ({}, {}) heading {:?}",
                ball.pos.x,
                ball.pos.y,
                ball.x_dir
            );
        }
    }

    for side in scorers {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.score = paddle.score.saturating_add(1);
                log::debug!("{:?} paddle scored, now {}", side, paddle.score);
            }
        }
        match side {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
    }
}
