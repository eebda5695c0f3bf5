//! Fixed-size cell storage used by both boards.

use super::types::{Square, Token};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised by direct board access.
///
/// Player input never reaches these: the move readers reject bad requests
/// first. Hitting one means a caller skipped validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates fall outside the board.
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Cell already holds a token.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// A `ROWS` x `COLS` grid of squares, indexed `[row][col]`.
///
/// Dimensions are fixed for the lifetime of the grid, and a claimed square
/// can never be cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const ROWS: usize, const COLS: usize> {
    cells: [[Square; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Grid<ROWS, COLS> {
    /// Creates a grid with every square empty.
    pub fn new() -> Self {
        Self {
            cells: [[Square::Empty; COLS]; ROWS],
        }
    }

    /// Returns the square at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Square, BoardError> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Claims the empty square at `(row, col)` for `token`.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, token: Token) -> Result<(), BoardError> {
        let square = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })?;
        if *square != Square::Empty {
            return Err(BoardError::CellOccupied { row, col });
        }
        *square = Square::Occupied(token);
        Ok(())
    }

    /// Returns true if `(row, col)` is on the grid and still empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Ok(Square::Empty))
    }

    /// Returns true if every square is claimed.
    pub fn is_full(&self) -> bool {
        self.cells().all(|s| s != Square::Empty)
    }

    /// Iterates over every square, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Iterates over rows, index 0 first.
    pub fn rows(&self) -> std::slice::Iter<'_, [Square; COLS]> {
        self.cells.iter()
    }

    /// Returns true if `token` holds every cell of the run starting at
    /// `(row, col)` and advancing by `(d_row, d_col)` for `len` cells.
    ///
    /// Runs that would leave the grid are never complete.
    pub fn run_is(
        &self,
        token: Token,
        (row, col): (usize, usize),
        (d_row, d_col): (isize, isize),
        len: usize,
    ) -> bool {
        (0..len).all(|step| {
            let step = step as isize;
            let r = row as isize + d_row * step;
            let c = col as isize + d_col * step;
            r >= 0
                && c >= 0
                && matches!(
                    self.get(r as usize, c as usize),
                    Ok(Square::Occupied(t)) if t == token
                )
        })
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Grid<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}
