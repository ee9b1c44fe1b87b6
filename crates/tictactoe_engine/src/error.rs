//! Snapshot persistence error types.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// Failure reading, writing or decoding a snapshot.
///
/// None of these leave a session half-updated: a snapshot is only applied
/// once it has been read and decoded in full.
#[derive(Debug, Display, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened, read or written.
    #[display("Snapshot file {} could not be accessed: {}", path.display(), source)]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The snapshot content is not a valid game state.
    #[display("Malformed snapshot: {}", _0)]
    Parse(serde_json::Error),

    /// The snapshot could not be encoded.
    #[display("Failed to encode snapshot: {}", _0)]
    Encode(serde_json::Error),
}

impl SnapshotError {
    /// Returns true when the failure came from the file system rather than the content.
    pub fn is_io(&self) -> bool {
        matches!(self, SnapshotError::Io { .. })
    }
}
