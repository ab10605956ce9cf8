use crate::{Arena, Ball, Events, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, arena: &Arena) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.move_by(intent.dir, arena);
    }
}

/// Move the ball and bounce it off the top and bottom walls
pub fn move_ball(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.move_within(arena) {
            log::trace!("Ball bounced off a wall at ({}, {})", ball.pos.x, ball.pos.y);
            events.ball_hit_wall = true;
        }
    }
}
