//! Reading a `row,col` move request.
//!
//! Checking happens in three stages so each failure keeps its own wording:
//! text to integers, integers to an on-board [`Coordinate`], then occupancy.

use super::types::{Board, Coordinate, SIZE};
use derive_more::{Display, Error};
use std::num::{IntErrorKind, ParseIntError};
use tracing::{debug, instrument};

/// Why a tic-tac-toe move request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EntryError {
    /// Text is not two comma-separated integers.
    #[display("malformed entry: row {row_text:?}, column {col_text:?}")]
    Malformed {
        /// Text before the first comma.
        row_text: String,
        /// Text after the first comma, empty when there is none.
        col_text: String,
    },
    /// Integers outside `0..=2`, including ones too large to represent.
    #[display("row {row_text} or column {col_text} is outside 0..=2")]
    OutOfRange {
        /// Row as echoed back to the player.
        row_text: String,
        /// Column as echoed back to the player.
        col_text: String,
    },
    /// The cell already holds a token.
    #[display("cell ({}, {}) is already taken", _0.row, _0.col)]
    Occupied(#[error(not(source))] Coordinate),
}

/// Splits `raw` into the text shown back to the player when it is malformed.
fn split_display(raw: &str) -> (String, String) {
    match raw.split_once(',') {
        Some((row, col)) => (row.trim().to_string(), col.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}

/// Parses one trimmed number; `Ok(None)` is numeric but too large for `i64`.
fn parse_number(text: &str) -> Result<Option<i64>, ParseIntError> {
    match text.parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Parses exactly two comma-separated integers.
///
/// Never panics: any other shape, including a missing or extra comma,
/// becomes [`EntryError::Malformed`]. Numbers too large for `i64` can never
/// be on the board, so they become [`EntryError::OutOfRange`].
#[instrument]
pub fn parse_numbers(raw: &str) -> Result<(i64, i64), EntryError> {
    let malformed = || {
        let (row_text, col_text) = split_display(raw);
        EntryError::Malformed { row_text, col_text }
    };

    let mut parts = raw.split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let (row, col) = (row.trim(), col.trim());
    match (parse_number(row), parse_number(col)) {
        (Ok(Some(row)), Ok(Some(col))) => Ok((row, col)),
        (Ok(row_n), Ok(col_n)) => {
            let echo = |n: Option<i64>, text: &str| {
                n.map_or_else(|| text.to_string(), |n| n.to_string())
            };
            Err(EntryError::OutOfRange {
                row_text: echo(row_n, row),
                col_text: echo(col_n, col),
            })
        }
        _ => Err(malformed()),
    }
}

/// Accepts a parsed pair only if both indices fall on the board.
#[instrument]
pub fn check_range(row: i64, col: i64) -> Result<Coordinate, EntryError> {
    let on_board = |n: i64| usize::try_from(n).ok().filter(|&n| n < SIZE);
    match (on_board(row), on_board(col)) {
        (Some(row), Some(col)) => Ok(Coordinate { row, col }),
        _ => Err(EntryError::OutOfRange {
            row_text: row.to_string(),
            col_text: col.to_string(),
        }),
    }
}

/// Returns true if `(row, col)` is on the board and still empty.
pub fn validate(board: &Board, row: i64, col: i64) -> bool {
    check_range(row, col).is_ok_and(|cell| board.is_empty_at(cell.row, cell.col))
}

/// Runs all three stages against `board`.
#[instrument(skip(board))]
pub(super) fn read(board: &Board, raw: &str) -> Result<Coordinate, EntryError> {
    let (row, col) = parse_numbers(raw)?;
    let cell = check_range(row, col)?;
    if !board.is_empty_at(cell.row, cell.col) {
        return Err(EntryError::Occupied(cell));
    }
    debug!(?cell, "entry accepted");
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Token;

    #[test]
    fn test_parses_pair() {
        assert_eq!(parse_numbers("1,2"), Ok((1, 2)));
        assert_eq!(parse_numbers(" 0 , 2 "), Ok((0, 2)));
        assert_eq!(parse_numbers("5,-1"), Ok((5, -1)));
    }

    #[test]
    fn test_letters_are_malformed() {
        assert_eq!(
            parse_numbers("a,b"),
            Err(EntryError::Malformed {
                row_text: "a".into(),
                col_text: "b".into(),
            })
        );
    }

    #[test]
    fn test_missing_comma_is_malformed() {
        assert_eq!(
            parse_numbers("12"),
            Err(EntryError::Malformed {
                row_text: "12".into(),
                col_text: String::new(),
            })
        );
        assert_eq!(
            parse_numbers(""),
            Err(EntryError::Malformed {
                row_text: String::new(),
                col_text: String::new(),
            })
        );
    }

    #[test]
    fn test_extra_comma_is_malformed() {
        assert_eq!(
            parse_numbers("1,2,3"),
            Err(EntryError::Malformed {
                row_text: "1".into(),
                col_text: "2,3".into(),
            })
        );
    }

    #[test]
    fn test_range_check() {
        assert_eq!(check_range(2, 0), Ok(Coordinate { row: 2, col: 0 }));
        assert_eq!(
            check_range(5, 1),
            Err(EntryError::OutOfRange {
                row_text: "5".into(),
                col_text: "1".into(),
            })
        );
        assert_eq!(
            check_range(0, -1),
            Err(EntryError::OutOfRange {
                row_text: "0".into(),
                col_text: "-1".into(),
            })
        );
    }

    #[test]
    fn test_huge_numbers_are_out_of_range() {
        assert_eq!(
            parse_numbers("99999999999999999999,0"),
            Err(EntryError::OutOfRange {
                row_text: "99999999999999999999".into(),
                col_text: "0".into(),
            })
        );
        assert_eq!(
            parse_numbers("1, -99999999999999999999"),
            Err(EntryError::OutOfRange {
                row_text: "1".into(),
                col_text: "-99999999999999999999".into(),
            })
        );
    }

    #[test]
    fn test_huge_number_beside_text_is_malformed() {
        assert!(matches!(
            parse_numbers("99999999999999999999,x"),
            Err(EntryError::Malformed { .. })
        ));
    }

    #[test]
    fn test_validate() {
        let mut board = Board::new();
        board.set(1, 1, Token::X).unwrap();
        assert!(validate(&board, 0, 0));
        assert!(!validate(&board, 1, 1));
        assert!(!validate(&board, 3, 0));
        assert!(!validate(&board, 0, -2));
    }

    #[test]
    fn test_read_reports_occupied() {
        let mut board = Board::new();
        board.set(0, 2, Token::O).unwrap();
        assert_eq!(
            read(&board, "0,2"),
            Err(EntryError::Occupied(Coordinate { row: 0, col: 2 }))
        );
        assert_eq!(read(&board, "2,0"), Ok(Coordinate { row: 2, col: 0 }));
    }

    #[test]
    fn test_read_checks_format_before_range() {
        let board = Board::new();
        assert!(matches!(read(&board, "9,x"), Err(EntryError::Malformed { .. })));
        assert!(matches!(read(&board, "9,0"), Err(EntryError::OutOfRange { .. })));
    }
}
