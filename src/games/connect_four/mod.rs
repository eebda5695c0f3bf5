//! Connect-four on a 6x7 board where tokens fall to the lowest free row.

mod entry;
mod narration;
mod rules;
mod types;

pub use entry::{EntryError, available_positions, landing_row, validate};
pub use narration::render;
pub use rules::{has_won, is_full};
pub use types::{Board, COLS, Column, ConnectFour, Placement, ROWS};
