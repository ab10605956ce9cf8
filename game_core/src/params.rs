/// Game tuning parameters for Pong
///
/// Speeds are in logical pixels per tick, not per second: the tick rate
/// defines how fast the game plays.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    pub const BORDER: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 15.0;
    pub const PADDLE_INSET: f32 = 30.0; // distance from the screen edge
    pub const PADDLE_START_OFFSET: f32 = 25.0; // above the vertical midline

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 11.0;

    // Pacing
    pub const TICK_RATE: u32 = 24; // ticks per second
}
