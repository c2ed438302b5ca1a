//! Tic Tac Toe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Config, GameController, init_tracing};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config).context("Failed to load configuration")?;

    let log_file = cli.log_file.as_ref().unwrap_or(config.log_file());
    init_tracing(log_file, config.log_level())?;
    info!(config_path = %cli.config.display(), ?config, "Starting Tic Tac Toe");

    let mut controller = GameController::new(*config.computer_mark());
    tictactoe::tui::run(&mut controller, &config, cli.mode.map(Into::into))
}
