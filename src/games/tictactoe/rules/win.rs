//! Win detection logic for tic-tac-toe.

use super::super::Board;
use crate::games::{Square, Token};
use tracing::instrument;

/// Every line of three: rows, then columns, then diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `token` holds all three cells of any line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, token: Token) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(row, col) == Ok(Square::Occupied(token)))
    })
}
