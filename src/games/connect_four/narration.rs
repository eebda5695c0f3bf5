//! Board rendering and player-facing text for connect-four.

use super::entry::{EntryError, available_positions};
use super::types::{Board, ConnectFour, Placement};
use crate::games::{Narration, Token, Verdict};

const SEPARATOR: &str = " --- --- --- --- --- --- --- --- ";
const HEADER: &str = "|R/C| a | b | c | d | e | f | g |";

/// Draws the board top row first, each row labelled with its 1-based number.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for (idx, row) in board.rows().enumerate().rev() {
        let cells: String = row
            .iter()
            .map(|square| format!("| {} ", square.symbol()))
            .collect();
        out.push_str(&format!("{SEPARATOR}\n| {} {cells}|\n", idx + 1));
    }
    out.push_str(&format!("{SEPARATOR}\n{HEADER}\n{SEPARATOR}\n"));
    out
}

impl Narration for ConnectFour {
    fn opening(&self) -> String {
        "New game: X goes first.\n".to_string()
    }

    fn round_start(&self, _board: &Board) -> String {
        String::new()
    }

    fn turn_start(&self, board: &Board, _token: Token) -> String {
        render(board)
    }

    fn move_prompt(&self, board: &Board, token: Token) -> String {
        let mut prompt = format!("{token}'s turn.\nWhere do you want your {token} placed?\n");
        if self.show_available() {
            let listed = available_positions(board)
                .iter()
                .map(|pos| format!("'{pos}'"))
                .collect::<Vec<_>>()
                .join(", ");
            prompt.push_str(&format!("Available positions are: [{listed}]\n"));
        }
        prompt.push_str("Please enter column-letter and row-number (e.g., a1): ");
        prompt
    }

    fn rejected(&self, _rejection: &EntryError) -> String {
        "Invalid entry. Try again.\n".to_string()
    }

    fn accepted(&self, _mv: Placement, _board: &Board) -> String {
        "Thank you for your selection.\n".to_string()
    }

    fn round_over(&self, verdict: Verdict, board: &Board) -> String {
        match verdict {
            Verdict::Won(token) => format!("{}{token} IS THE WINNER!!!\n", render(board)),
            Verdict::Draw => format!("{}It is a tie!\n", render(board)),
            Verdict::InProgress => String::new(),
        }
    }

    fn rematch_prompt(&self) -> String {
        "Another game (y/n)? ".to_string()
    }
}
