//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if every square is occupied.
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Token;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(1, 1, Token::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_eight_of_nine_not_full() {
        let mut board = Board::new();
        for idx in 0..8 {
            board.set(idx / 3, idx % 3, Token::O).unwrap();
        }
        assert!(!is_full(&board));
        board.set(2, 2, Token::X).unwrap();
        assert!(is_full(&board));
    }
}
