//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Settings read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Suggested save file for new games and the open prompt.
    #[serde(default = "default_snapshot_path")]
    snapshot_path: PathBuf,

    /// Player one's marker: starts on ties and on unusable guesses.
    #[serde(default = "default_tie_break_player")]
    tie_break_default: Player,

    /// Pretty-print save files.
    #[serde(default = "default_pretty")]
    pretty: bool,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("tic-tac-toe.json")
}

fn default_tie_break_player() -> Player {
    Player::O
}

fn default_pretty() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            tie_break_default: default_tie_break_player(),
            pretty: default_pretty(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(snapshot_path = %config.snapshot_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
