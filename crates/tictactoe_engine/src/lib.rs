//! Tic-tac-toe engine with snapshot persistence.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] (win, draw, turn order)
//! - **Session**: the one mutable [`GameSession`] and its start/stop/move
//!   state machine
//! - **Snapshot**: the flat JSON shape a game is saved as, plus a
//!   [`SnapshotStore`] to put it somewhere
//! - **Tie-break**: die-roll guessing to pick the first player
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, MoveOutcome, Player};
//!
//! let mut session = GameSession::new();
//! session.start_or_restart(&mut || Player::X);
//! assert_eq!(session.apply_move(4), MoveOutcome::Continue { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod store;
pub mod tiebreak;
mod types;

pub use error::SnapshotError;
pub use position::Position;
pub use rules::{WinResult, evaluate_winner, is_draw, next_player};
pub use session::{GameSession, MoveOutcome, PendingRestart, Phase, RestartStep, Toggle};
pub use snapshot::Snapshot;
pub use store::{JsonFileStore, SnapshotStore};
pub use tiebreak::{DiceTieBreak, StartingPlayerDecider, TieBreakOutcome};
pub use types::{Board, Cell, Player};
