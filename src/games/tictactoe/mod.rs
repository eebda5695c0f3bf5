//! Tic-tac-toe on a 3x3 board with direct `row,col` entry.

mod entry;
mod narration;
mod rules;
mod types;

pub use entry::{EntryError, check_range, parse_numbers, validate};
pub use narration::render;
pub use rules::{has_won, is_full};
pub use types::{Board, Coordinate, SIZE, TicTacToe};
