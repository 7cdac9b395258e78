//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Player;

/// Strictly Minimax - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play or solve tic-tac-toe with exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a position
    Solve {
        /// Nine cells row-major: X, O, and . for empty (spaces and | ignored)
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long)]
        side: Option<Player>,

        /// Print the search result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play against the engine in the terminal
    Play {
        /// Path to game config (TOML); defaults apply if it doesn't exist
        #[arg(short, long, default_value = "strictly_minimax.toml")]
        config: std::path::PathBuf,

        /// Side played by the engine (overrides config)
        #[arg(long)]
        ai: Option<Player>,

        /// Side that moves first (overrides config)
        #[arg(long)]
        first: Option<Player>,
    },
}
