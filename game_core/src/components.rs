use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::map::{Arena, Rect};

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Vertical direction, screen space (down is positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalDir {
    Up,
    #[default]
    None,
    Down,
}

impl VerticalDir {
    /// Multiplier applied to a speed: -1, 0 or +1
    pub fn sign(self) -> f32 {
        match self {
            VerticalDir::Up => -1.0,
            VerticalDir::None => 0.0,
            VerticalDir::Down => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            VerticalDir::Up => VerticalDir::Down,
            VerticalDir::None => VerticalDir::None,
            VerticalDir::Down => VerticalDir::Up,
        }
    }
}

/// Horizontal direction of the ball; forward is toward the right goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalDir {
    Backward,
    #[default]
    None,
    Forward,
}

impl HorizontalDir {
    /// Multiplier applied to a speed: -1, 0 or +1
    pub fn sign(self) -> f32 {
        match self {
            HorizontalDir::Backward => -1.0,
            HorizontalDir::None => 0.0,
            HorizontalDir::Forward => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            HorizontalDir::Backward => HorizontalDir::Forward,
            HorizontalDir::None => HorizontalDir::None,
            HorizontalDir::Forward => HorizontalDir::Backward,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge, fixed for the whole match
    pub y: f32, // top edge, clamped to the arena
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32, speed: f32) -> Self {
        Self {
            side,
            x: pos.x,
            y: pos.y,
            width,
            height,
            speed,
            score: 0,
        }
    }

    /// Move one tick in `dir`, then clamp to the walls.
    ///
    /// The clamp always runs, even for `VerticalDir::None`.
    pub fn move_by(&mut self, dir: VerticalDir, arena: &Arena) {
        self.y += self.speed * dir.sign();
        self.y = arena.clamp_paddle_y(self.y, self.height);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Movement intent for paddle. Stays in effect until changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: VerticalDir,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of checking the ball against both goal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOutcome {
    None,
    /// Ball crossed the left goal line: a point for the right paddle
    LeftScoredForRight,
    /// Ball crossed the right goal line: a point for the left paddle
    RightScoredForLeft,
}

impl GoalOutcome {
    /// Side that earns the point, if any
    pub fn scorer(self) -> Option<Side> {
        match self {
            GoalOutcome::None => None,
            GoalOutcome::LeftScoredForRight => Some(Side::Right),
            GoalOutcome::RightScoredForLeft => Some(Side::Left),
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // center
    pub radius: f32,
    pub speed: f32,
    pub x_dir: HorizontalDir,
    pub y_dir: VerticalDir,
    /// Set once a goal has been reported, cleared by `reset`
    pub scored: bool,
}

impl Ball {
    pub fn new(
        pos: Vec2,
        radius: f32,
        speed: f32,
        x_dir: HorizontalDir,
        y_dir: VerticalDir,
    ) -> Self {
        Self {
            pos,
            radius,
            speed,
            x_dir,
            y_dir,
            scored: false,
        }
    }

    /// Advance one tick and bounce off the top and bottom walls.
    ///
    /// Order matters: move, clamp the center inside the walls, then test the
    /// clamped position to decide the bounce. Returns true if `y_dir` flipped.
    pub fn move_within(&mut self, arena: &Arena) -> bool {
        self.pos.x += self.speed * self.x_dir.sign();
        self.pos.y += self.speed * self.y_dir.sign();

        let upper = arena.top() + self.radius;
        let lower = arena.bottom() - self.radius;

        if self.pos.y - self.radius <= arena.top() {
            self.pos.y = upper;
        }
        if self.pos.y + self.radius >= arena.bottom() {
            self.pos.y = lower;
        }

        // A ball with no vertical motion can rest on a wall line without bouncing
        if self.y_dir != VerticalDir::None && (self.pos.y <= upper || self.pos.y >= lower) {
            self.y_dir = self.y_dir.flipped();
            return true;
        }
        false
    }

    /// Reverse horizontal direction after touching a paddle
    pub fn collide(&mut self) {
        self.x_dir = self.x_dir.flipped();
    }

    /// Report a goal crossing once; later calls return `GoalOutcome::None`
    /// until `reset` clears the guard.
    pub fn goal_outcome(&mut self, arena: &Arena) -> GoalOutcome {
        if self.scored {
            return GoalOutcome::None;
        }

        let outcome = if self.pos.x <= arena.left_goal_line(self.radius) {
            GoalOutcome::LeftScoredForRight
        } else if self.pos.x >= arena.right_goal_line(self.radius) {
            GoalOutcome::RightScoredForLeft
        } else {
            GoalOutcome::None
        };

        if outcome != GoalOutcome::None {
            self.scored = true;
        }
        outcome
    }

    /// Serve again from the center, heading the other way.
    ///
    /// Vertical direction and speed carry over.
    pub fn reset(&mut self, arena: &Arena) {
        self.pos = arena.center();
        self.x_dir = self.x_dir.flipped();
        self.scored = false;
    }

    pub fn rect(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}
