//! Strictly Minimax - Unified CLI
//!
//! Solve positions or play against the exhaustive minimax engine.

#![warn(missing_docs)]

mod cli;
mod play;
mod solve;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve { board, side, json } => solve::run_solve(board, side, json),
        Command::Play { config, ai, first } => play::run_play(&config, ai, first),
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_minimax=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
