//! Draw detection logic for connect-four.

use super::super::types::{Board, COLS, ROWS};
use tracing::instrument;

/// Checks if no column can take another token.
///
/// Gravity fills each column bottom-up, so only the top row needs looking at.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    (0..COLS).all(|col| !board.is_empty_at(ROWS - 1, col))
}
