//! Turn alternation.

use crate::Player;

/// Returns the player who moves after `current`.
pub fn next_player(current: Player) -> Player {
    current.opponent()
}
