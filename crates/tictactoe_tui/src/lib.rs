//! Terminal front-end for the tic-tac-toe engine.
//!
//! The engine knows nothing about screens, keys or files; this crate is the
//! collaborator that renders the board, collects tie-break guesses, asks for
//! file paths and saves a snapshot after every change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod ui;

pub use app::{App, Mode, PathPurpose};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
