//! Strictly Minimax - tic-tac-toe with a provably optimal opponent
//!
//! A headless game core: the board, terminal detection, and an exhaustive
//! minimax search that never proposes an illegal move.
//!
//! # Architecture
//!
//! - **Board**: 3x3 squares plus an incrementally kept marked count
//! - **Outcome**: win/draw detection over the eight lines in a fixed scan order
//! - **Search**: full-depth minimax, `X` maximizes and `O` minimizes
//! - **Game**: turn-taking session between a human and the engine
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Player, Position, SearchEngine};
//!
//! let mut board = Board::new();
//! board.place(0, 0, Player::X)?;
//! board.place(1, 1, Player::O)?;
//! board.place(0, 1, Player::X)?;
//!
//! // O must block the top row.
//! let pos = SearchEngine::best_move(&board, Player::O)?;
//! assert_eq!(pos, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod game;
mod invariants;
mod outcome;
mod position;
mod search;
mod types;

// Crate-level exports - Board model
pub use board::Board;
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use types::{Player, Role, Square};

// Crate-level exports - Search
pub use search::{SearchEngine, SearchResult};

// Crate-level exports - Game session
pub use config::GameConfig;
pub use game::Game;
pub use invariants::{
    GameInvariants, HistoryMatchesBoard, Invariant, InvariantSet, InvariantViolation,
    MarkedCountConsistent, TurnAlternates,
};

// Crate-level exports - Errors
pub use error::{ConfigError, GameError, IllegalMove, NoMovesAvailable, ParseBoardError};
