//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board, kept apart from storage so the
//! [`Rules`](crate::Rules) impl stays a thin dispatcher.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::has_won;
