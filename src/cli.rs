//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_timetravel::Variant;

/// Tic-tac-toe with time travel through the move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Output format for replay results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty-printed JSON view.
    #[default]
    Json,
    /// Board, status, and move list as plain text.
    Text,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game variant (overrides the config file)
        #[arg(long, value_enum)]
        variant: Option<Variant>,
    },

    /// Apply a JSON action script and print the resulting game
    Replay {
        /// JSON array of actions, e.g. [{"type": "MOVE", "id": 4}]
        actions: PathBuf,

        /// Game variant (overrides the config file)
        #[arg(long, value_enum)]
        variant: Option<Variant>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}
