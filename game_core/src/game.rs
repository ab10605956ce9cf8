//! The match orchestrator

use hecs::World;

use crate::components::{Side, VerticalDir};
use crate::config::Config;
use crate::error::ConfigError;
use crate::map::Arena;
use crate::resources::{Events, InputQueue, RenderSnapshot};
use crate::systems::capture_snapshot;
use crate::{create_ball, create_paddle, step};

/// A running two-player match.
///
/// Owns both paddles and the ball. Advance it with [`Match::step`], one call
/// per tick; the caller decides the tick rate.
pub struct Match {
    world: World,
    arena: Arena,
    events: Events,
    input_queue: InputQueue,
    tick: u64,
}

impl Match {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, &config);

        let arena = config.arena();
        log::info!(
            "Match created: {}x{} arena, border {}, ball speed {}",
            arena.width,
            arena.height,
            arena.border,
            config.ball_speed
        );

        Ok(Self {
            world,
            arena,
            events: Events::new(),
            input_queue: InputQueue::new(),
            tick: 0,
        })
    }

    /// Change a paddle's direction, effective from the next step
    pub fn set_intent(&mut self, side: Side, dir: VerticalDir) {
        log::trace!("Intent {:?} -> {:?}", side, dir);
        self.input_queue.push_input(side, dir);
    }

    /// Run one tick and return what to draw
    pub fn step(&mut self) -> RenderSnapshot {
        step(
            &mut self.world,
            &self.arena,
            &mut self.events,
            &mut self.input_queue,
        );
        self.tick += 1;
        self.snapshot()
    }

    /// Current state without advancing
    pub fn snapshot(&self) -> RenderSnapshot {
        capture_snapshot(&self.world)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// What happened during the last step
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Number of steps taken so far
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

/// Validate `config` and set up a match
pub fn create_match(config: Config) -> Result<Match, ConfigError> {
    Match::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use glam::Vec2;

    #[test]
    fn test_new_match_starts_from_config() {
        let game = create_match(Config::new()).unwrap();
        let snapshot = game.snapshot();

        assert_eq!(game.tick(), 0);
        assert_eq!(snapshot.left_paddle, Rect::new(30.0, 275.0, 10.0, 90.0));
        assert_eq!(snapshot.right_paddle, Rect::new(780.0, 275.0, 10.0, 90.0));
        assert_eq!(snapshot.ball_center, Vec2::new(410.0, 310.0));
        assert_eq!((snapshot.left_score, snapshot.right_score), (0, 0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            paddle_height: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            create_match(config),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_intent_applies_on_next_step() {
        let mut game = create_match(Config::new()).unwrap();
        game.set_intent(Side::Left, VerticalDir::Up);

        // Nothing moves until the match steps
        assert_eq!(game.snapshot().left_paddle.y, 275.0);

        let snapshot = game.step();
        assert_eq!(snapshot.left_paddle.y, 260.0);
        assert_eq!(snapshot.right_paddle.y, 275.0);
        assert_eq!(game.tick(), 1);
    }

    #[test]
    fn test_snapshot_does_not_advance() {
        let mut game = create_match(Config::new()).unwrap();
        let stepped = game.step();
        assert_eq!(game.snapshot(), stepped);
        assert_eq!(game.snapshot(), stepped);
        assert_eq!(stepped.ball_center, Vec2::new(421.0, 321.0));
    }
}
