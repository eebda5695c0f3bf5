//! Command-line interface for grid_games.

use clap::{Parser, Subcommand};

/// Grid Games - two-player console Tic-Tac-Toe and Connect-Four
#[derive(Parser, Debug)]
#[command(name = "grid_games")]
#[command(about = "Two-player console board games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play tic-tac-toe on a 3x3 board
    #[command(alias = "ttt")]
    Tictactoe,

    /// Play connect-four on a 6x7 board
    #[command(alias = "c4")]
    ConnectFour,
}
