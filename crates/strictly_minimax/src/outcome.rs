//! Terminal detection for tic-tac-toe.
//!
//! Outcomes are derived from the squares on demand, never stored.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};

/// One of the eight three-in-a-row lines.
///
/// Declaration order is the scan order of [`winning_line`]: columns,
/// then rows, then the descending and ascending diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Left column.
    Column0,
    /// Middle column.
    Column1,
    /// Right column.
    Column2,
    /// Top row.
    Row0,
    /// Middle row.
    Row1,
    /// Bottom row.
    Row2,
    /// Top-left to bottom-right.
    DiagonalDesc,
    /// Bottom-left to top-right.
    DiagonalAsc,
}

impl Line {
    /// All lines in scan order.
    pub const ALL: [Line; 8] = [
        Line::Column0,
        Line::Column1,
        Line::Column2,
        Line::Row0,
        Line::Row1,
        Line::Row2,
        Line::DiagonalDesc,
        Line::DiagonalAsc,
    ];

    /// The three cells of this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            Line::Column0 => [TopLeft, MiddleLeft, BottomLeft],
            Line::Column1 => [TopCenter, Center, BottomCenter],
            Line::Column2 => [TopRight, MiddleRight, BottomRight],
            Line::Row0 => [TopLeft, TopCenter, TopRight],
            Line::Row1 => [MiddleLeft, Center, MiddleRight],
            Line::Row2 => [BottomLeft, BottomCenter, BottomRight],
            Line::DiagonalDesc => [TopLeft, Center, BottomRight],
            Line::DiagonalAsc => [BottomLeft, Center, TopRight],
        }
    }
}

/// Terminal status of a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// No line completed and at least one empty square.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{} wins", _0)]
    Win(Player),
    /// Board full with no completed line.
    #[display("a draw")]
    Draw,
}

impl Outcome {
    /// Checks if the position is decided.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Returns the first fully occupied single-player line in scan order.
///
/// On a malformed board with several completed lines, only the first is
/// reported.
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some((line, player))
            }
            _ => None,
        }
    })
}

/// Computes the outcome of a board: a win first, then a draw if full.
pub fn outcome(board: &Board) -> Outcome {
    if let Some((_, player)) = winning_line(board) {
        Outcome::Win(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
