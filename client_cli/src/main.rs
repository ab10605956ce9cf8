//! Terminal Pong - two players, one keyboard
//!
//! A thin shell around `game_core`: it polls the keyboard, feeds paddle
//! intents to the match, steps it at a fixed rate and draws the snapshot.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{create_match, Config, Match, Params};

mod input;
mod renderer;

use input::{HeldKeys, Input};
use renderer::{Renderer, TerminalRenderer};

/// Without key release events, a key counts as held this long after it is
/// first pressed. Longer than the usual 500-660 ms initial repeat delay.
const KEY_FIRST_HOLD: Duration = Duration::from_millis(700);

/// Hold window after each auto-repeat, a few repeat intervals
const KEY_REPEAT_HOLD: Duration = Duration::from_millis(150);

/// Upper bound on a single input wait, so ticks stay on time
const INPUT_POLL: Duration = Duration::from_millis(5);

/// Two-player Pong in the terminal
#[derive(Parser)]
#[command(name = "pong")]
#[command(about = "Two-player Pong in the terminal", long_about = None)]
struct Cli {
    /// JSON match configuration; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulation ticks per second
    #[arg(long, default_value_t = Params::TICK_RATE)]
    fps: u32,

    /// Write log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Restore terminal state - called on panic
fn restore_terminal() {
    use crossterm::{
        cursor, execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show);
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    // Log records would tear the terminal UI, so stderr stays quiet by default
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("cannot parse config {}", path.display()))?;
    log::info!("Loaded match config from {}", path.display());
    Ok(config)
}

fn apply_input(game: &mut Match, held: &mut HeldKeys, input: Input, now: Instant) {
    match input {
        Input::Press(control) => {
            held.press(control, now);
            let (side, dir) = control.pressed();
            game.set_intent(side, dir);
        }
        Input::Release(control) => {
            held.release(control);
            let (side, dir) = control.released();
            game.set_intent(side, dir);
        }
        Input::Quit => {}
    }
}

fn run(game: &mut Match, renderer: &mut dyn Renderer, tick: Duration) -> Result<()> {
    let mut held = HeldKeys::new(KEY_FIRST_HOLD, KEY_REPEAT_HOLD);
    let mut next_tick = Instant::now();

    renderer.render(&game.snapshot())?;

    loop {
        let now = Instant::now();
        let wait = next_tick.saturating_duration_since(now).min(INPUT_POLL);

        if let Some(input) = renderer.poll_input(wait)? {
            if input == Input::Quit {
                log::info!("Quit after {} ticks", game.tick());
                return Ok(());
            }
            apply_input(game, &mut held, input, Instant::now());
        }

        let now = Instant::now();
        if now < next_tick {
            continue;
        }

        if !renderer.reports_key_release() {
            for control in held.expire(now) {
                let (side, dir) = control.released();
                game.set_intent(side, dir);
            }
        }

        let snapshot = game.step();
        if game.events().goal_scored() {
            log::info!("Score {:02} - {:02}", snapshot.left_score, snapshot.right_score);
        }
        renderer.render(&snapshot)?;

        next_tick += tick;
        // Don't try to catch up after a stall
        if next_tick < now {
            next_tick = now + tick;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = load_config(cli.config.as_ref())?;
    let mut game = create_match(config).context("invalid match configuration")?;
    let tick = Duration::from_secs_f64(1.0 / f64::from(cli.fps.max(1)));

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let mut renderer = TerminalRenderer::new(*game.arena());
    renderer.init()?;
    let result = run(&mut game, &mut renderer, tick);
    renderer.cleanup()?;
    result
}
