//! Grid Games - command-line entry point

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use grid_games::{ConnectFour, Narration, Session, Settings, TextConsole, TicTacToe};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    init_tracing(&settings);

    match cli.command {
        Command::Tictactoe => play(TicTacToe),
        Command::ConnectFour => play(ConnectFour::new(
            *settings.connect_four().show_available_positions(),
        )),
    }
}

/// Logs go to stderr so stdout carries only the game transcript.
fn init_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.logging().filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one game on the terminal until the players stop.
#[instrument(skip(game))]
fn play<G: Narration>(game: G) -> Result<()> {
    let mut session = Session::new(game, TextConsole::stdio());
    let verdicts = session.run()?;
    info!(rounds = verdicts.len(), ?verdicts, "Goodbye");
    Ok(())
}
