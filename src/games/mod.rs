//! Game implementations and the capability contract they share.
//!
//! Each game supplies its own board shape, move syntax and win rule through
//! [`Rules`], and its own wording through [`Narration`]. The turn loop in
//! [`crate::Session`] only ever talks to these two traits.

mod grid;
mod types;

pub mod connect_four;
pub mod tictactoe;

pub use grid::{BoardError, Grid};
pub use types::{Square, Token, Verdict};

use std::fmt;
use tracing::instrument;

/// Board logic a game must provide to be driven by a [`crate::Session`].
///
/// Implementations are stateless descriptions of a game; all mutable state
/// lives in the board handed to each call.
pub trait Rules {
    /// Board storage for one round.
    type Board: fmt::Debug;
    /// A validated move, ready to be placed.
    type Move: Copy + fmt::Debug;
    /// Why a raw move request was refused.
    type Rejection: fmt::Display + fmt::Debug;

    /// Returns a board with every cell empty.
    fn new_board(&self) -> Self::Board;

    /// Parses and validates a raw move request against the current board.
    ///
    /// Never mutates the board: a rejection leaves the round untouched.
    fn read_move(&self, board: &Self::Board, raw: &str) -> Result<Self::Move, Self::Rejection>;

    /// Places `token` at the cell addressed by `mv`.
    fn place(&self, board: &mut Self::Board, mv: Self::Move, token: Token) -> Result<(), BoardError>;

    /// Returns true if `token` owns a complete winning line anywhere on the board.
    fn has_won(&self, board: &Self::Board, token: Token) -> bool;

    /// Returns true if no further move can be placed.
    fn is_full(&self, board: &Self::Board) -> bool;

    /// Decides whether the move just made by `last_mover` ended the round.
    ///
    /// Only the mover can have completed a line, and a win on the final cell
    /// beats the draw.
    #[instrument(skip(self, board))]
    fn is_over(&self, board: &Self::Board, last_mover: Token) -> Verdict {
        if self.has_won(board, last_mover) {
            Verdict::Won(last_mover)
        } else if self.is_full(board) {
            Verdict::Draw
        } else {
            Verdict::InProgress
        }
    }
}

/// Text a game shows its players at each step of the turn loop.
///
/// Every hook returns the exact bytes to write, newlines included, so a hook
/// that should print nothing returns an empty string.
pub trait Narration: Rules {
    /// Printed once when the program starts.
    fn opening(&self) -> String {
        String::new()
    }

    /// Printed when a fresh round begins.
    fn round_start(&self, board: &Self::Board) -> String;

    /// Printed once at the start of each turn, before the first prompt.
    fn turn_start(&self, board: &Self::Board, token: Token) -> String;

    /// Printed before every attempt to read a move.
    fn move_prompt(&self, board: &Self::Board, token: Token) -> String;

    /// Printed after a move request is refused.
    fn rejected(&self, rejection: &Self::Rejection) -> String;

    /// Printed after a move has been placed on `board`.
    fn accepted(&self, mv: Self::Move, board: &Self::Board) -> String;

    /// Printed when the round ends.
    fn round_over(&self, verdict: Verdict, board: &Self::Board) -> String;

    /// Asks whether to play again.
    fn rematch_prompt(&self) -> String;

    /// Printed when the players decline another round.
    fn farewell(&self) -> String {
        "Thank you for playing!\n".to_string()
    }
}
