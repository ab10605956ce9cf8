//! Keyboard input handling

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use game_core::Control;

/// What the player asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Press(Control),
    Release(Control),
    Quit,
}

/// Translate a terminal key event
pub fn translate_key(event: &KeyEvent) -> Option<Input> {
    let control = match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            return (event.kind == KeyEventKind::Press).then_some(Input::Quit);
        }
        KeyCode::Char(c) => Control::from_key(&c.to_string())?,
        KeyCode::Up => Control::RightUp,
        KeyCode::Down => Control::RightDown,
        _ => return None,
    };

    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(Input::Press(control)),
        KeyEventKind::Release => Some(Input::Release(control)),
    }
}

/// Synthesizes key releases for terminals that only report presses.
///
/// Held keys auto-repeat, so a key counts as released once no press has
/// arrived for a while. The first press waits out the keyboard's initial
/// repeat delay, later repeats only need to cover the repeat interval.
pub struct HeldKeys {
    first_hold: Duration,
    repeat_hold: Duration,
    pressed: HashMap<Control, Instant>,
}

impl HeldKeys {
    pub fn new(first_hold: Duration, repeat_hold: Duration) -> Self {
        Self {
            first_hold,
            repeat_hold,
            pressed: HashMap::new(),
        }
    }

    pub fn press(&mut self, control: Control, now: Instant) {
        let hold = if self.pressed.contains_key(&control) {
            self.repeat_hold
        } else {
            self.first_hold
        };
        // The newest key owns its side
        self.pressed.retain(|held, _| held.side() != control.side());
        self.pressed.insert(control, now + hold);
    }

    pub fn release(&mut self, control: Control) {
        self.pressed.remove(&control);
    }

    /// Keys whose hold lapsed since the last call
    pub fn expire(&mut self, now: Instant) -> Vec<Control> {
        let expired: Vec<Control> = self
            .pressed
            .iter()
            .filter(|(_, deadline)| now >= **deadline)
            .map(|(control, _)| *control)
            .collect();
        for control in &expired {
            self.pressed.remove(control);
        }
        expired
    }
}
