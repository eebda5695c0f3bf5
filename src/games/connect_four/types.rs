//! Board, column and move types for connect-four.

use super::super::{BoardError, Grid, Rules, Token};
use super::{entry, rules};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of rows.
pub const ROWS: usize = 6;
/// Number of columns.
pub const COLS: usize = 7;

/// 6x7 board, row 0 at the bottom.
pub type Board = Grid<ROWS, COLS>;

/// A column, named by the letter printed under it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Column {
    /// Leftmost column.
    A,
    /// Column b.
    B,
    /// Column c.
    C,
    /// Centre column.
    D,
    /// Column e.
    E,
    /// Column f.
    F,
    /// Rightmost column.
    G,
}

impl Column {
    /// Returns the zero-based board index of this column.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the column at `index`, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// A validated drop: the column played and the row the token lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{column}{}", row + 1)]
pub struct Placement {
    /// Column played.
    pub column: Column,
    /// Zero-based landing row, counted from the bottom.
    pub row: usize,
}

/// Connect-four rules and wording.
#[derive(Debug, Clone, Copy)]
pub struct ConnectFour {
    show_available: bool,
}

impl ConnectFour {
    /// Creates the game, optionally listing open positions in each prompt.
    pub fn new(show_available: bool) -> Self {
        Self { show_available }
    }

    /// Whether prompts list the open positions.
    pub fn show_available(&self) -> bool {
        self.show_available
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Rules for ConnectFour {
    type Board = Board;
    type Move = Placement;
    type Rejection = entry::EntryError;

    fn new_board(&self) -> Board {
        Board::new()
    }

    fn read_move(&self, board: &Board, raw: &str) -> Result<Placement, entry::EntryError> {
        entry::read(board, raw)
    }

    #[instrument(skip(self, board), fields(placement = %mv))]
    fn place(&self, board: &mut Board, mv: Placement, token: Token) -> Result<(), BoardError> {
        board.set(mv.row, mv.column.index(), token)
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

    #[test]
    fn test_column_letters() {
        assert_eq!(Column::A.to_string(), "a");
        assert_eq!(Column::G.to_string(), "g");
        assert_eq!("d".parse::<Column>(), Ok(Column::D));
        assert!("D".parse::<Column>().is_err());
        assert!("h".parse::<Column>().is_err());
    }

    #[test]
    fn test_column_index_round_trip() {
        for column in Column::iter() {
            assert_eq!(Column::from_index(column.index()), Some(column));
        }
        assert_eq!(Column::iter().count(), COLS);
        assert_eq!(Column::from_index(COLS), None);
    }

    #[test]
    fn test_placement_display_is_one_based() {
        let mv = Placement {
            column: Column::C,
            row: 0,
        };
        assert_eq!(mv.to_string(), "c1");
    }

    #[test]
    fn test_vertical_win_after_fourth_drop() {
        let game = ConnectFour::default();
        let mut board = game.new_board();
        let x_moves = ["a1", "a2", "a3", "a4"];
        let o_moves = ["b1", "b2", "b3"];
        for (turn, raw) in x_moves.iter().enumerate() {
            let mv = game.read_move(&board, raw).unwrap();
            game.place(&mut board, mv, Token::X).unwrap();
            let verdict = game.is_over(&board, Token::X);
            if turn < 3 {
                assert_eq!(verdict, Verdict::InProgress);
                let mv = game.read_move(&board, o_moves[turn]).unwrap();
                game.place(&mut board, mv, Token::O).unwrap();
                assert_eq!(game.is_over(&board, Token::O), Verdict::InProgress);
            } else {
                assert_eq!(verdict, Verdict::Won(Token::X));
            }
        }
    }

    #[test]
    fn test_win_on_last_drop_beats_tie() {
        let game = ConnectFour::default();
        let mut board = game.new_board();
        // O's d6 fills the last cell and the falling diagonal d6-e5-f4-g3.
        let moves = [
            "f1", "g1", "b1", "d1", "g2", "b2", "e1", "e2", "f2", "b3", "a1", "d2", "b4", "f3",
            "c1", "a2", "a3", "g3", "b5", "a4", "e3", "f4", "c2", "a5", "e4", "f5", "a6", "e5",
            "c3", "e6", "f6", "b6", "g4", "c4", "g5", "c5", "c6", "d3", "d4", "g6", "d5", "d6",
        ];
        let mut token = Token::X;
        let mut verdict = Verdict::InProgress;
        for raw in moves {
            assert_eq!(verdict, Verdict::InProgress, "round ended before {raw}");
            let mv = game.read_move(&board, raw).unwrap();
            game.place(&mut board, mv, token).unwrap();
            verdict = game.is_over(&board, token);
            token = token.opponent();
        }
        assert!(game.is_full(&board));
        assert_eq!(verdict, Verdict::Won(Token::O));
    }
}
