//! Tic-tac-toe for the terminal.
//!
//! Two modes are offered from a menu: two humans sharing the keyboard, or a
//! human against the computer. All game rules live in `tictactoe_engine`;
//! this crate adds configuration, logging and the terminal UI.
//!
//! # Architecture
//!
//! - **Engine**: board, rules, computer player and the turn controller
//! - **Config**: optional TOML file with player names and computer settings
//! - **TUI**: menu and game screens driven by a single event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
pub mod tui;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, ModeArg};
pub use config::{Config, ConfigError};
pub use logging::init_tracing;

// Crate-level exports - Game types
pub use tictactoe_engine::{computer, rules};
pub use tictactoe_engine::{
    Board, Cell, GameController, GameState, InvalidMove, Mark, Mode, Move, Phase, Player,
    Position, Snapshot,
};
