use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{Side, VerticalDir};
use crate::map::Rect;

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn goal_scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Intent changes waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, VerticalDir)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, side: Side, dir: VerticalDir) {
        self.inputs.push((side, dir));
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub left_score: u32,
    pub right_score: u32,
    pub ball: Rect,
    pub ball_center: Vec2,
    pub ball_radius: f32,
}

impl RenderSnapshot {
    pub fn paddle(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }
}
