//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// This does not look for a winning line. A full board that also holds a
/// winning line is still reported as full, so check
/// [`evaluate_winner`](super::evaluate_winner) first.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}
