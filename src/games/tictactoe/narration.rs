//! Board rendering and player-facing text for tic-tac-toe.

use super::entry::EntryError;
use super::types::{Board, Coordinate, TicTacToe};
use crate::games::{Narration, Token, Verdict};

const RULE: &str = "-----------------";
const TRY_AGAIN: &str = "Invalid entry: try again.\nRow & column numbers must be either 0, 1, or 2.\n";

/// Draws the board with its row/column header, followed by a blank line.
pub fn render(board: &Board) -> String {
    let mut out = format!("{RULE}\nR\\C | 0 | 1 | 2 |\n{RULE}\n");
    for (idx, row) in board.rows().enumerate() {
        let cells = row
            .iter()
            .map(|s| s.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("{idx}   | {cells} |\n{RULE}\n"));
    }
    out.push('\n');
    out
}

impl Narration for TicTacToe {
    fn round_start(&self, board: &Board) -> String {
        format!("New Game: X goes first.\n{}", render(board))
    }

    fn turn_start(&self, _board: &Board, _token: Token) -> String {
        String::new()
    }

    fn move_prompt(&self, _board: &Board, token: Token) -> String {
        format!(
            "{token}'s turn\n\
             Where do you want your {token} placed?\n\
             Please enter row number and column number separated by a comma\n"
        )
    }

    fn rejected(&self, rejection: &EntryError) -> String {
        match rejection {
            EntryError::Malformed { row_text, col_text } => format!(
                "You have entered row #{row_text}\n\t\t\tand column # {col_text}\n{TRY_AGAIN}"
            ),
            EntryError::OutOfRange { row_text, col_text } => format!(
                "You have entered row #{row_text}\n\t\t\tand column # {col_text}\n\n{TRY_AGAIN}"
            ),
            EntryError::Occupied(Coordinate { row, col }) => format!(
                "You have entered row #{row}\nand column #{col}\n\
                 That cell is already taken.\nPlease make another selection.\n"
            ),
        }
    }

    fn accepted(&self, mv: Coordinate, board: &Board) -> String {
        format!(
            "You have entered row #{}\n\t  and column #{}\nThank you for your selection.\n{}",
            mv.row,
            mv.col,
            render(board)
        )
    }

    fn round_over(&self, verdict: Verdict, _board: &Board) -> String {
        match verdict {
            Verdict::Won(token) => format!("{token} IS THE WINNER!!!\n"),
            Verdict::Draw => "DRAW! NOBODY WINS!\n".to_string(),
            Verdict::InProgress => String::new(),
        }
    }

    fn rematch_prompt(&self) -> String {
        "Another game? Enter Y or y for yes.\n".to_string()
    }
}
