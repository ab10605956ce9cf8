//! Deterministic two-player Pong simulation.
//!
//! Paddles and the ball live in a `hecs` world owned by a [`Match`]. Each call
//! to [`Match::step`] runs the systems in a fixed order and returns a
//! [`RenderSnapshot`]. Windowing, input polling and drawing belong to the
//! caller.

pub mod components;
pub mod config;
pub mod controls;
pub mod error;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controls::*;
pub use error::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// Paddle contacts are judged on the positions from the end of the previous
/// tick, before anything moves.
pub fn step(
    world: &mut World,
    arena: &Arena,
    events: &mut Events,
    input_queue: &mut InputQueue,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input_queue);

    // 2. Ball vs paddles, on last tick's geometry
    check_paddle_collisions(world, events);

    // 3. Move paddles based on intents
    move_paddles(world, arena);

    // 4. Move ball, bouncing off the walls
    move_ball(world, arena, events);

    // 5. Check scoring (ball crossed a goal line)
    check_scoring(world, arena, events);
}

/// Helper to create a paddle entity at its configured starting position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_start(side),
        config.paddle_width,
        config.paddle_height,
        config.paddle_speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity at its configured serve point
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let ball = Ball::new(
        config.ball_start,
        config.ball_radius,
        config.ball_speed,
        config.ball_x_dir,
        config.ball_y_dir,
    );
    world.spawn((ball,))
}
