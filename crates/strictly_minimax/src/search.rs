//! Exhaustive minimax search.
//!
//! Every search runs to the end of the game tree: there is no depth limit,
//! no pruning and no evaluation heuristic. Scores are always from `X`'s
//! point of view (`+1` X wins, `-1` O wins, `0` draw), and the roles are
//! tied to the marks: `X` maximizes, `O` minimizes, whichever side the
//! automated opponent is playing.
//!
//! Ties are broken by first occurrence in row-major order. A later move
//! with an equal score never replaces an earlier one.

use crate::board::Board;
use crate::error::NoMovesAvailable;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    score: i32,
    best_move: Option<Position>,
    nodes: u64,
}

impl SearchResult {
    /// Game-theoretic value from `X`'s point of view.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Move for the side to move. `None` only on a terminal position.
    pub fn best_move(&self) -> Option<Position> {
        self.best_move
    }

    /// Positions visited, including the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// The automated opponent.
///
/// Stateless apart from which side it plays; every call searches a private
/// copy of the board it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchEngine {
    player: Player,
}

impl SearchEngine {
    /// Creates an engine that plays `player`.
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    /// The side this engine plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Picks this engine's move on `board`.
    ///
    /// # Errors
    ///
    /// [`NoMovesAvailable`] if the position is already decided.
    #[instrument(skip(self, board), fields(player = %self.player))]
    pub fn choose(&self, board: &Board) -> Result<Position, NoMovesAvailable> {
        Self::best_move(board, self.player)
    }

    /// Optimal move for `side_to_move`.
    ///
    /// # Errors
    ///
    /// [`NoMovesAvailable`] if the position is already decided. Callers are
    /// expected to check [`Board::outcome`] first.
    #[instrument(skip(board), fields(board = %board.notation()))]
    pub fn best_move(board: &Board, side_to_move: Player) -> Result<Position, NoMovesAvailable> {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Err(NoMovesAvailable { outcome });
        }

        let result = Self::evaluate(board, side_to_move);
        debug!(
            side = %side_to_move,
            score = result.score,
            best_move = ?result.best_move,
            nodes = result.nodes,
            "Search complete"
        );
        result.best_move.ok_or(NoMovesAvailable { outcome })
    }

    /// Full minimax value of `board` with `side_to_move` on move.
    ///
    /// Terminal positions return their score with no move.
    pub fn evaluate(board: &Board, side_to_move: Player) -> SearchResult {
        let mut nodes = 0;
        let (score, best_move) = minimax(board, side_to_move, &mut nodes);
        SearchResult {
            score,
            best_move,
            nodes,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(player) => Some(player.win_score()),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

fn minimax(board: &Board, side: Player, nodes: &mut u64) -> (i32, Option<Position>) {
    *nodes += 1;
    if let Some(score) = terminal_score(board.outcome()) {
        return (score, None);
    }

    let role = side.role();
    let mut best: Option<(i32, Position)> = None;
    for pos in board.empty_cells() {
        let child = board.with_mark(pos, side);
        let (score, _) = minimax(&child, side.opponent(), nodes);
        if best.is_none_or(|(best_score, _)| role.prefers(score, best_score)) {
            best = Some((score, pos));
        }
    }

    // A non-terminal board always has an empty square.
    match best {
        Some((score, pos)) => (score, Some(pos)),
        None => (0, None),
    }
}
