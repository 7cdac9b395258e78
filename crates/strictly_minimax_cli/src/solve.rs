//! One-shot analysis of a position.

use anyhow::{Context, Result};
use strictly_minimax::{Board, Player, SearchEngine};
use tracing::{info, instrument};

/// Prints the outcome or the optimal move for `board`.
#[instrument]
pub fn run_solve(board: String, side: Option<Player>, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let side = side.unwrap_or_else(|| board.inferred_to_move());
    info!(board = %board.notation(), %side, "Solving position");

    let result = SearchEngine::evaluate(&board, side);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    match result.best_move() {
        None => println!("Position is decided: {}", board.outcome()),
        Some(pos) => {
            let verdict = match result.score() {
                1 => "X wins",
                -1 => "O wins",
                _ => "draw",
            };
            println!("{side} to move: play {pos}");
            println!("Value with perfect play: {} ({verdict})", result.score());
            println!("Positions searched: {}", result.nodes());
        }
    }
    Ok(())
}
