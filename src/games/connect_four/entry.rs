//! Reading a column-letter/row-digit move request under gravity.

use super::types::{Board, Column, Placement, ROWS};
use derive_more::{Display, Error};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Why a connect-four move request was refused.
///
/// Players see the same message for all of these; the variants exist for
/// logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EntryError {
    /// Not a letter `a`-`g` followed by a digit `1`-`6`.
    #[display("malformed entry {_0:?}")]
    Malformed(#[error(not(source))] String),
    /// Every row of the column is taken.
    #[display("column {_0} is full")]
    ColumnFull(#[error(not(source))] Column),
    /// The requested row is not where the token would land.
    #[display("{column}{requested} would float; the token lands in row {landing}")]
    Misplaced {
        /// Column played.
        column: Column,
        /// One-based row the player asked for.
        requested: usize,
        /// One-based row the token would actually occupy.
        landing: usize,
    },
}

/// Returns the lowest empty row of `column`, or `None` if it is full.
pub fn landing_row(board: &Board, column: Column) -> Option<usize> {
    (0..ROWS).find(|&row| board.is_empty_at(row, column.index()))
}

/// Returns true if a token for `column` would land exactly in the
/// one-based `requested_row`.
///
/// The landing row is computed from the board, never taken from the player,
/// so a token can never float above an empty cell.
pub fn validate(board: &Board, column: Column, requested_row: usize) -> bool {
    (1..=ROWS).contains(&requested_row)
        && landing_row(board, column).is_some_and(|row| row + 1 == requested_row)
}

/// Lists every legal entry, one per non-full column, in column order.
pub fn available_positions(board: &Board) -> Vec<String> {
    Column::iter()
        .filter_map(|column| {
            landing_row(board, column).map(|row| Placement { column, row }.to_string())
        })
        .collect()
}

/// Parses `raw` and checks it against the gravity landing rule.
#[instrument(skip(board))]
pub(super) fn read(board: &Board, raw: &str) -> Result<Placement, EntryError> {
    let malformed = || EntryError::Malformed(raw.to_string());

    let mut chars = raw.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(malformed());
    };
    let column = letter
        .to_string()
        .parse::<Column>()
        .map_err(|_| malformed())?;
    let requested = digit
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|d| (1..=ROWS).contains(d))
        .ok_or_else(malformed)?;

    let row = landing_row(board, column).ok_or(EntryError::ColumnFull(column))?;
    if row + 1 != requested {
        return Err(EntryError::Misplaced {
            column,
            requested,
            landing: row + 1,
        });
    }
    let placement = Placement { column, row };
    debug!(%placement, "entry accepted");
    Ok(placement)
}
