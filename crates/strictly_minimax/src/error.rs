//! Error types.

use crate::outcome::Outcome;
use crate::position::Position;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A placement the board refuses. Always a caller bug.
///
/// A rejected placement leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The coordinates are not on the 3x3 board.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// The search was asked for a move on a position that is already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No moves available: position is already {}", outcome)]
pub struct NoMovesAvailable {
    /// The terminal outcome of the position.
    pub outcome: Outcome,
}

/// Error that can occur when driving a game session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The board refused the placement.
    #[display("Illegal move: {}", _0)]
    #[from]
    IllegalMove(#[error(source)] IllegalMove),

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] Outcome),

    /// The automated opponent was asked to move out of turn.
    #[display("It's not the automated player's turn")]
    NotAiTurn,

    /// The search engine failed.
    #[display("Search failed: {}", _0)]
    #[from]
    Search(#[error(source)] NoMovesAvailable),
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    Length(#[error(not(source))] usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected board symbol {:?}", _0)]
    Symbol(#[error(not(source))] char),
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
