//! Core domain types shared by both games.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Token {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Token {
    /// Returns the opponent's token.
    pub fn opponent(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }
}

/// A single cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Token),
}

impl Square {
    /// Returns the symbol drawn for this cell; empty cells draw as a space.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Token::X) => 'X',
            Square::Occupied(Token::O) => 'O',
        }
    }
}

/// Result of checking a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Play continues with the other player.
    InProgress,
    /// The given player completed a line.
    Won(Token),
    /// Board full, no line completed.
    Draw,
}

impl Verdict {
    /// Returns true for a win or a draw.
    pub fn is_over(self) -> bool {
        !matches!(self, Verdict::InProgress)
    }
}
