use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, anchored at its top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square that bounds a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The bordered playing field.
///
/// Everything lives in screen space: the playable area starts at
/// `(border, border)` and the whole screen is `width + 2 * border` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub border: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, border: f32) -> Self {
        Self {
            width,
            height,
            border,
        }
    }

    /// Y of the top wall
    pub fn top(&self) -> f32 {
        self.border
    }

    /// Y of the bottom wall
    pub fn bottom(&self) -> f32 {
        self.height + self.border
    }

    pub fn outer_width(&self) -> f32 {
        self.width + 2.0 * self.border
    }

    pub fn outer_height(&self) -> f32 {
        self.height + 2.0 * self.border
    }

    /// Serve point
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.width / 2.0).floor() + self.border,
            (self.height / 2.0).floor() + self.border,
        )
    }

    /// A ball whose center is at or left of this line has entered the left goal
    pub fn left_goal_line(&self, radius: f32) -> f32 {
        self.border + radius
    }

    /// A ball whose center is at or right of this line has entered the right goal
    pub fn right_goal_line(&self, radius: f32) -> f32 {
        self.outer_width() - radius
    }

    /// Clamp the top edge of a paddle so it stays between the walls
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        let mut y = y;
        if y < self.top() {
            y = self.top();
        }
        if y + paddle_height > self.bottom() {
            y = self.bottom() - paddle_height;
        }
        y
    }
}
