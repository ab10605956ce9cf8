use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{HorizontalDir, Side, VerticalDir};
use crate::error::ConfigError;
use crate::map::Arena;
use crate::params::Params;

/// Match configuration
///
/// Paddle positions are top-left corners, the ball position is its center,
/// all in screen space (the playable area starts at `(border, border)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub border: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_start: Vec2,
    pub ball_x_dir: HorizontalDir,
    pub ball_y_dir: VerticalDir,
}

impl Default for Config {
    fn default() -> Self {
        let arena = Arena::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT, Params::BORDER);
        let paddle_y = (Params::ARENA_HEIGHT / 2.0).floor() - Params::PADDLE_START_OFFSET;

        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            border: Params::BORDER,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            left_paddle: Vec2::new(Params::PADDLE_INSET, paddle_y),
            right_paddle: Vec2::new(
                arena.outer_width() - Params::PADDLE_INSET - Params::PADDLE_WIDTH,
                paddle_y,
            ),
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_start: arena.center(),
            ball_x_dir: HorizontalDir::Forward,
            ball_y_dir: VerticalDir::Down,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height, self.border)
    }

    /// Starting top-left corner of a paddle
    pub fn paddle_start(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    /// Check that the clamping rules can hold for this geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("border", self.border),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("left_paddle.x", self.left_paddle.x),
            ("left_paddle.y", self.left_paddle.y),
            ("right_paddle.x", self.right_paddle.x),
            ("right_paddle.y", self.right_paddle.y),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("ball_start.x", self.ball_start.x),
            ("ball_start.y", self.ball_start.y),
        ];
        if let Some(&(name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }

        let dimensions = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
        ];
        if let Some(&(name, value)) = dimensions.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive { name, value });
        }

        if self.border < 0.0 {
            return Err(ConfigError::NegativeBorder(self.border));
        }
        for (name, value) in [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeSpeed { name, value });
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if self.ball_radius * 2.0 >= self.arena_height {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                arena: self.arena_height,
            });
        }

        let arena = self.arena();
        for side in [Side::Left, Side::Right] {
            let pos = self.paddle_start(side);
            let fits_x = pos.x >= 0.0 && pos.x + self.paddle_width <= arena.outer_width();
            let fits_y = pos.y >= arena.top() && pos.y + self.paddle_height <= arena.bottom();
            if !(fits_x && fits_y) {
                return Err(ConfigError::PaddleOutOfArena(side));
            }
        }

        let ball = self.ball_start;
        let r = self.ball_radius;
        let fits_x = ball.x > arena.left_goal_line(r) && ball.x < arena.right_goal_line(r);
        let fits_y = ball.y >= arena.top() + r && ball.y <= arena.bottom() - r;
        if !(fits_x && fits_y) {
            return Err(ConfigError::BallOutOfArena);
        }

        if self.ball_x_dir == HorizontalDir::None && self.ball_y_dir == VerticalDir::None {
            return Err(ConfigError::StationaryBall);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = Config::new();
        assert_eq!(config.left_paddle, Vec2::new(30.0, 275.0), "Left paddle");
        assert_eq!(config.right_paddle, Vec2::new(780.0, 275.0), "Right paddle");
        assert_eq!(config.ball_start, Vec2::new(410.0, 310.0), "Ball serve point");
        assert_eq!(config.ball_x_dir, HorizontalDir::Forward);
        assert_eq!(config.ball_y_dir, VerticalDir::Down);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_paddle_start_by_side() {
        let config = Config::new();
        assert_eq!(config.paddle_start(Side::Left), config.left_paddle);
        assert_eq!(config.paddle_start(Side::Right), config.right_paddle);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = Config {
            arena_width: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "arena_width",
                value: 0.0
            })
        );

        let config = Config {
            ball_radius: -1.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "ball_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let config = Config {
            ball_speed: f32::NAN,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonFinite("ball_speed")));

        let config = Config {
            left_paddle: Vec2::new(30.0, f32::INFINITY),
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite("left_paddle.y"))
        );
    }

    #[test]
    fn test_rejects_negative_border_and_speed() {
        let config = Config {
            border: -2.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeBorder(-2.0)));

        let config = Config {
            paddle_speed: -15.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeSpeed {
                name: "paddle_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_border_is_playable() {
        let config = Config {
            border: 0.0,
            left_paddle: Vec2::new(20.0, 255.0),
            right_paddle: Vec2::new(770.0, 255.0),
            ball_start: Vec2::new(400.0, 300.0),
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_paddle_taller_than_arena() {
        let config = Config {
            paddle_height: 601.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_ball() {
        let config = Config {
            ball_radius: 300.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_paddle_outside_arena() {
        let config = Config {
            right_paddle: Vec2::new(815.0, 275.0),
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddleOutOfArena(Side::Right))
        );

        let config = Config {
            left_paddle: Vec2::new(30.0, 5.0),
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PaddleOutOfArena(Side::Left))
        );
    }

    #[test]
    fn test_rejects_ball_outside_arena() {
        let config = Config {
            ball_start: Vec2::new(410.0, 605.0),
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::BallOutOfArena));

        let config = Config {
            ball_start: Vec2::new(18.0, 310.0),
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::BallOutOfArena));
    }

    #[test]
    fn test_rejects_stationary_ball() {
        let config = Config {
            ball_x_dir: HorizontalDir::None,
            ball_y_dir: VerticalDir::None,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::StationaryBall));

        let config = Config {
            ball_y_dir: VerticalDir::None,
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "ball_speed": 7.0, "ball_y_dir": "Up" }"#).unwrap();
        assert_eq!(config.ball_speed, 7.0);
        assert_eq!(config.ball_y_dir, VerticalDir::Up);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
        assert_eq!(config.left_paddle, Vec2::new(30.0, 275.0));
    }
}
