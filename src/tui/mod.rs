//! Terminal UI: a menu screen and a game screen over one event loop.
//!
//! The UI holds no game rules. Key presses and clicks become explicit
//! [`GameController`] calls and every frame is drawn from a fresh
//! [`Snapshot`](tictactoe_engine::Snapshot).

mod app;
pub mod input;
mod screen;
mod screens;
pub mod ui;

pub use app::App;
pub use screen::{Screen, ScreenTransition};
pub use screens::{InGameScreen, MainMenuScreen};

use crate::Config;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_engine::{GameController, Mode};
use tracing::{error, info};

/// Takes over the terminal and runs the UI until the player exits.
///
/// With `mode` set the game starts straight away instead of showing the menu.
/// Once raw mode is on, the terminal is restored on every path, and the first
/// error (setup, event loop or teardown) is the one returned.
pub fn run(controller: &mut GameController, config: &Config, mode: Option<Mode>) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let res = run_in_raw_mode(controller, config, mode);
    first_error(res, restore_terminal())
}

/// Logs both outcomes and keeps the earlier error.
fn first_error(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    res.and(restored)
}

fn run_in_raw_mode(
    controller: &mut GameController,
    config: &Config,
    mode: Option<Mode>,
) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    App::new(controller, config).run(&mut terminal, mode)
}

/// Undoes everything `run` set up, attempting each step even if an earlier one fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)?;
    Ok(())
}
