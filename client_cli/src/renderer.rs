use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use game_core::{Arena, Rect, RenderSnapshot, Side};
use glam::Vec2;

use crate::input::{translate_key, Input};

const BORDER_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const ARENA_COLOR: Color = Color::Rgb {
    r: 57,
    g: 137,
    b: 249,
};
const PIECE_COLOR: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Center line dashes, in screen pixels
const DASH_START: f32 = 10.0; // below the top wall
const DASH_SIZE: f32 = 8.0;
const DASH_SPACING: f32 = 20.0;

const SIDES: [Side; 2] = [Side::Left, Side::Right];

/// Score text anchors, relative to the arena's horizontal midline
const SCORE_Y: f32 = 15.0;

fn score_offset(side: Side) -> f32 {
    match side {
        Side::Left => -110.0,
        Side::Right => 40.0,
    }
}

/// Trait that abstracts rendering implementation.
pub trait Renderer {
    /// Initialize the renderer
    fn init(&mut self) -> io::Result<()>;

    /// Draw one frame
    fn render(&mut self, snapshot: &RenderSnapshot) -> io::Result<()>;

    /// Clean up and restore terminal/display state
    fn cleanup(&mut self) -> io::Result<()>;

    /// Wait up to `timeout` for input from the user
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>>;

    /// Whether key releases are reported. Without them the caller must
    /// synthesize releases.
    fn reports_key_release(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Border,
    Arena,
    Piece,
}

/// Draws the match as colored terminal cells, scaled to fit the terminal
pub struct TerminalRenderer {
    arena: Arena,
    enhanced_keys: bool,
    active: bool,
}

impl TerminalRenderer {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            enhanced_keys: false,
            active: false,
        }
    }

    /// Terminal cells available for the field, leaving one line for the help text
    fn field_size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((cols.max(20), rows.saturating_sub(1).max(10)))
    }

    fn classify(&self, snapshot: &RenderSnapshot, x: f32, y: f32) -> Cell {
        let contains = |r: &Rect| x >= r.x && x < r.right() && y >= r.y && y < r.bottom();

        if SIDES.iter().any(|&side| contains(&snapshot.paddle(side))) {
            return Cell::Piece;
        }
        if snapshot.ball_center.distance(Vec2::new(x, y)) <= snapshot.ball_radius {
            return Cell::Piece;
        }

        let arena = &self.arena;
        let inside = x >= arena.border
            && x < arena.border + arena.width
            && y >= arena.top()
            && y < arena.bottom();
        if !inside {
            return Cell::Border;
        }

        // Dashed line down the middle
        let mid = (arena.width / 2.0).floor() + arena.border;
        let offset = y - (arena.top() + DASH_START);
        if x >= mid && x < mid + DASH_SIZE && offset >= 0.0 && offset % DASH_SPACING < DASH_SIZE {
            return Cell::Piece;
        }

        Cell::Arena
    }

    fn draw_scores(
        &self,
        snapshot: &RenderSnapshot,
        stdout: &mut io::Stdout,
        cols: u16,
        rows: u16,
    ) -> io::Result<()> {
        let scale_x = cols as f32 / self.arena.outer_width();
        let scale_y = rows as f32 / self.arena.outer_height();
        let mid = (self.arena.width / 2.0).floor();
        let row = (SCORE_Y * scale_y) as u16;

        for side in SIDES {
            let col = ((mid + score_offset(side)) * scale_x).max(0.0) as u16;
            queue!(
                stdout,
                cursor::MoveTo(col, row),
                SetBackgroundColor(ARENA_COLOR),
                SetForegroundColor(PIECE_COLOR),
                Print(format!("{:02}", snapshot.score(side)))
            )?;
        }
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        // From here on cleanup has something to undo, even if a later step fails
        self.active = true;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced_keys = true;
        }
        log::info!(
            "Terminal ready, key release events {}",
            if self.enhanced_keys { "on" } else { "off" }
        );

        Ok(())
    }

    fn render(&mut self, snapshot: &RenderSnapshot) -> io::Result<()> {
        let (cols, rows) = self.field_size()?;
        let cell_w = self.arena.outer_width() / cols as f32;
        let cell_h = self.arena.outer_height() / rows as f32;

        let mut stdout = io::stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        for row in 0..rows {
            let y = (row as f32 + 0.5) * cell_h;
            let mut current = None;
            for col in 0..cols {
                let x = (col as f32 + 0.5) * cell_w;
                let cell = self.classify(snapshot, x, y);
                if current != Some(cell) {
                    let color = match cell {
                        Cell::Border => BORDER_COLOR,
                        Cell::Arena => ARENA_COLOR,
                        Cell::Piece => PIECE_COLOR,
                    };
                    queue!(stdout, SetBackgroundColor(color))?;
                    current = Some(cell);
                }
                queue!(stdout, Print(" "))?;
            }
            queue!(stdout, ResetColor, Print("\r\n"))?;
        }

        self.draw_scores(snapshot, &mut stdout, cols, rows)?;

        queue!(
            stdout,
            cursor::MoveTo(0, rows),
            ResetColor,
            terminal::Clear(ClearType::CurrentLine),
            Print("W/S: left paddle | Up/Down: right paddle | Q: quit")
        )?;

        stdout.flush()
    }

    fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stdout = io::stdout();
        let keys = if self.enhanced_keys {
            execute!(stdout, PopKeyboardEnhancementFlags)
        } else {
            Ok(())
        };
        self.enhanced_keys = false;
        let screen = execute!(
            stdout,
            cursor::Show,
            terminal::LeaveAlternateScreen,
            ResetColor
        );
        // Raw mode goes even if the escape sequences could not be written
        terminal::disable_raw_mode()?;
        keys.and(screen)
    }

    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(translate_key(&key));
            }
        }
        Ok(None)
    }

    fn reports_key_release(&self) -> bool {
        self.enhanced_keys
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
