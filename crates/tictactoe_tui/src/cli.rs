//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, saved as JSON
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with JSON save files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Save file to open at start-up
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Where to write the log (the terminal is taken by the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
