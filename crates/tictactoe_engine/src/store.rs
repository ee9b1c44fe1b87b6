//! Snapshot persistence.

use crate::{Snapshot, SnapshotError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Somewhere a snapshot can be saved to and loaded from.
pub trait SnapshotStore {
    /// Writes the snapshot, replacing whatever was stored before.
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;

    /// Reads the stored snapshot.
    fn load(&self) -> Result<Snapshot, SnapshotError>;
}

/// Stores a snapshot as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Creates a store for `path`, writing pretty-printed JSON.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Chooses between pretty-printed and compact output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SnapshotError {
        SnapshotError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonFileStore {
    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let text = snapshot.to_json(self.pretty)?;
        std::fs::write(&self.path, text).map_err(|e| {
            warn!(error = %e, "Failed to write snapshot");
            self.io_error(e)
        })?;
        debug!("Snapshot saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Snapshot, SnapshotError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            warn!(error = %e, "Failed to read snapshot");
            self.io_error(e)
        })?;
        let snapshot = Snapshot::from_json(&text)?;
        info!("Snapshot read");
        Ok(snapshot)
    }
}
