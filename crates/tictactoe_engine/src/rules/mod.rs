//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here holds state,
//! so the session layer composes them in whatever order it needs.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_draw;
pub use turn::next_player;
pub use win::{WINNING_LINES, WinResult, evaluate_winner};
