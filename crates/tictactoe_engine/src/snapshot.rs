//! Serializable game snapshot.
//!
//! A snapshot is the whole persisted contract: the board, whose turn it is and
//! whether a game is running. On disk it looks like
//!
//! ```json
//! {
//!   "board": ["X", "", "", "", "O", "", "", "", ""],
//!   "currentPlayer": "X",
//!   "running": true
//! }
//! ```
//!
//! Decoding is strict about the board (exactly nine cells, each `""`, `"X"` or
//! `"O"`) and the marker (`"X"` or `"O"`), so a bad file is rejected whole.

use crate::{Board, Player, SnapshotError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Minimal state needed to resume a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Board cells in row-major order.
    board: Board,
    /// Player to move.
    current_player: Player,
    /// Whether a game is in progress.
    running: bool,
}

impl Snapshot {
    /// Creates a snapshot from its parts.
    pub fn new(board: Board, current_player: Player, running: bool) -> Self {
        Self {
            board,
            current_player,
            running,
        }
    }

    /// Decodes a snapshot from JSON text.
    #[instrument(skip(text), fields(len = text.len()))]
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(SnapshotError::Parse)
    }

    /// Encodes the snapshot as JSON, pretty-printed with two-space indentation
    /// when `pretty` is set.
    #[instrument(skip(self))]
    pub fn to_json(&self, pretty: bool) -> Result<String, SnapshotError> {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        encoded.map_err(SnapshotError::Encode)
    }
}
