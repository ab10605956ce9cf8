use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued intent changes to the paddles they name.
///
/// Intents stay on the paddle until another input replaces them.
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for (side, dir) in input_queue.inputs.drain(..) {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                intent.dir = dir;
            }
        }
    }
}
