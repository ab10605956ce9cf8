use crate::{Ball, Paddle, RenderSnapshot, Side};
use hecs::World;

/// Read the current geometry and scores for rendering. Nothing is mutated.
pub fn capture_snapshot(world: &World) -> RenderSnapshot {
    let mut snapshot = RenderSnapshot::default();

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => {
                snapshot.left_paddle = paddle.rect();
                snapshot.left_score = paddle.score;
            }
            Side::Right => {
                snapshot.right_paddle = paddle.rect();
                snapshot.right_score = paddle.score;
            }
        }
    }

    if let Some((_e, ball)) = world.query::<&Ball>().iter().next() {
        snapshot.ball = ball.rect();
        snapshot.ball_center = ball.pos;
        snapshot.ball_radius = ball.radius;
    }

    snapshot
}
