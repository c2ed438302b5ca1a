//! Command-line interface for tictactoe.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_engine::Mode;

/// Tic Tac Toe - play a friend or the computer in your terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-mode tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file, overriding the config
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Skip the menu and start a game in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Game mode as given on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans sharing the keyboard
    Multiplayer,
    /// Play against the computer
    SinglePlayer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Multiplayer => Mode::Multiplayer,
            ModeArg::SinglePlayer => Mode::SinglePlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.mode, None);
    }

    #[test]
    fn test_mode_flag() {
        let cli = Cli::parse_from(["tictactoe", "--mode", "single-player"]);
        assert_eq!(cli.mode.map(Mode::from), Some(Mode::SinglePlayer));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--mode", "online"]).is_err());
    }
}
