//! Win detection logic for connect-four.

use super::super::types::{Board, COLS, ROWS};
use crate::games::{Square, Token};
use tracing::instrument;

/// Length of a winning run.
pub const RUN: usize = 4;

/// Right, up, up-right and down-right. The opposite directions are covered
/// by starting the scan from the other end of the run.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Checks whether `token` holds four in a row anywhere on the board.
///
/// Scans from every cell `token` owns, so the result does not depend on
/// which move was played last.
#[instrument(skip(board))]
pub fn has_won(board: &Board, token: Token) -> bool {
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| (row, col)))
        .filter(|&(row, col)| board.get(row, col) == Ok(Square::Occupied(token)))
        .any(|start| {
            DIRECTIONS
                .iter()
                .any(|&step| board.run_is(token, start, step, RUN))
        })
}
