//! Keyboard mapping shared by presentation shells
//!
//! W/S drive the left paddle, the arrow keys drive the right one. A key
//! press sets that direction; releasing either key of a side stops it.

use crate::components::{Side, VerticalDir};

/// One of the four movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Control {
    /// Look up a key by name ("w", "S", "ArrowUp", ...)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Control::LeftUp),
            "s" | "S" => Some(Control::LeftDown),
            "ArrowUp" => Some(Control::RightUp),
            "ArrowDown" => Some(Control::RightDown),
            _ => None,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Control::LeftUp | Control::LeftDown => Side::Left,
            Control::RightUp | Control::RightDown => Side::Right,
        }
    }

    pub fn dir(self) -> VerticalDir {
        match self {
            Control::LeftUp | Control::RightUp => VerticalDir::Up,
            Control::LeftDown | Control::RightDown => VerticalDir::Down,
        }
    }

    /// Intent change for a key-down
    pub fn pressed(self) -> (Side, VerticalDir) {
        (self.side(), self.dir())
    }

    /// Intent change for a key-up
    pub fn released(self) -> (Side, VerticalDir) {
        (self.side(), VerticalDir::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup() {
        assert_eq!(Control::from_key("w"), Some(Control::LeftUp));
        assert_eq!(Control::from_key("S"), Some(Control::LeftDown));
        assert_eq!(Control::from_key("ArrowUp"), Some(Control::RightUp));
        assert_eq!(Control::from_key("ArrowDown"), Some(Control::RightDown));
        assert_eq!(Control::from_key("q"), None);
    }

    #[test]
    fn test_press_sets_direction_for_its_side() {
        assert_eq!(Control::LeftUp.pressed(), (Side::Left, VerticalDir::Up));
        assert_eq!(Control::RightDown.pressed(), (Side::Right, VerticalDir::Down));
    }

    #[test]
    fn test_release_stops_its_side() {
        assert_eq!(Control::LeftDown.released(), (Side::Left, VerticalDir::None));
        assert_eq!(Control::RightUp.released(), (Side::Right, VerticalDir::None));
    }
}
