//! Configuration errors

use thiserror::Error;

/// A match configuration whose geometry cannot be played.
///
/// Raised once by `Match::new`; a running match never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("{name} must be greater than zero, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("border must not be negative, got {0}")]
    NegativeBorder(f32),

    #[error("{name} must not be negative, got {value}")]
    NegativeSpeed { name: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("ball radius {radius} must be less than half the arena height {arena}")]
    BallTooLarge { radius: f32, arena: f32 },

    #[error("{0:?} paddle starts outside the arena")]
    PaddleOutOfArena(crate::components::Side),

    #[error("ball starts outside the playable area")]
    BallOutOfArena,

    #[error("ball needs a horizontal or vertical direction")]
    StationaryBall,
}
