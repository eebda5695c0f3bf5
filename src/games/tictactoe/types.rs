//! Board and move types for tic-tac-toe.

use super::super::{BoardError, Grid, Rules, Token};
use super::{entry, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// 3x3 board, row 0 at the top.
pub type Board = Grid<SIZE, SIZE>;

/// A validated board cell, both indices in `0..SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

/// Tic-tac-toe rules and wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl Rules for TicTacToe {
    type Board = Board;
    type Move = Coordinate;
    type Rejection = entry::EntryError;

    fn new_board(&self) -> Board {
        Board::new()
    }

    fn read_move(&self, board: &Board, raw: &str) -> Result<Coordinate, entry::EntryError> {
        entry::read(board, raw)
    }

    #[instrument(skip(self, board))]
    fn place(&self, board: &mut Board, mv: Coordinate, token: Token) -> Result<(), BoardError> {
        board.set(mv.row, mv.col, token)
    }

    fn has_won(&self, board: &Board, token: Token) -> bool {
        rules::has_won(board, token)
    }

    fn is_full(&self, board: &Board) -> bool {
        rules::is_full(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Verdict;

    fn play(moves: &[(usize, usize)]) -> (Board, Verdict) {
        let game = TicTacToe;
        let mut board = game.new_board();
        let mut token = Token::X;
        let mut verdict = Verdict::InProgress;
        for &(row, col) in moves {
            game.place(&mut board, Coordinate { row, col }, token).unwrap();
            verdict = game.is_over(&board, token);
            token = token.opponent();
        }
        (board, verdict)
    }

    #[test]
    fn test_top_row_win_after_fifth_move() {
        let (_, verdict) = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(verdict, Verdict::Won(Token::X));
    }

    #[test]
    fn test_game_continues_without_line() {
        let (_, verdict) = play(&[(0, 0), (1, 1)]);
        assert_eq!(verdict, Verdict::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let (board, verdict) = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(verdict, Verdict::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X O X / O X O / O X X: X's ninth move fills the board and the diagonal
        let (board, verdict) = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(verdict, Verdict::Won(Token::X));
    }

    #[test]
    fn test_place_on_occupied_cell_is_refused() {
        let game = TicTacToe;
        let mut board = game.new_board();
        let cell = Coordinate { row: 2, col: 1 };
        game.place(&mut board, cell, Token::X).unwrap();
        assert_eq!(
            game.place(&mut board, cell, Token::O),
            Err(BoardError::CellOccupied { row: 2, col: 1 })
        );
    }
}
