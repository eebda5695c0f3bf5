//! Grid Games library - two-player console board games
//!
//! Tic-tac-toe and connect-four share one turn loop. Each game provides its
//! board, move syntax and win rule through [`Rules`], and its wording
//! through [`Narration`]; [`Session`] drives either over any [`Console`].
//!
//! # Architecture
//!
//! - **Games**: board storage, move validation, win and draw detection
//! - **Session**: the turn loop and rematch handling
//! - **Console**: line-based text I/O, swappable for tests
//! - **Settings**: optional TOML configuration
//!
//! # Example
//!
//! ```no_run
//! use grid_games::{Session, TextConsole, TicTacToe};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(TicTacToe, TextConsole::stdio());
//! let verdicts = session.run()?;
//! println!("{} rounds played", verdicts.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod session;
mod settings;

pub mod games;

// Crate-level exports - Engine
pub use games::{BoardError, Grid, Narration, Rules, Square, Token, Verdict};

// Crate-level exports - Games
pub use games::connect_four::ConnectFour;
pub use games::tictactoe::TicTacToe;

// Crate-level exports - Turn loop and I/O
pub use console::{Console, TextConsole};
pub use session::Session;

// Crate-level exports - Configuration
pub use settings::{ConfigError, ConnectFourSettings, LoggingSettings, Settings};
