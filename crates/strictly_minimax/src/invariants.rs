//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every move.
//! They are checked in debug builds and can be tested independently.

use crate::game::Game;
use crate::types::Square;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The marked count equals the number of occupied squares.
pub struct MarkedCountConsistent;

impl Invariant<Game> for MarkedCountConsistent {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let occupied = board.squares().iter().filter(|s| **s != Square::Empty).count();
        board.marked() == occupied
    }

    fn description() -> &'static str {
        "Marked count matches occupied squares"
    }
}

/// Every history entry is an occupied square and every occupied square is in the history.
pub struct HistoryMatchesBoard;

impl Invariant<Game> for HistoryMatchesBoard {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        game.history().len() == board.marked()
            && game
                .history()
                .iter()
                .all(|pos| board.get(*pos) != Square::Empty)
    }

    fn description() -> &'static str {
        "History matches board"
    }
}

/// The side to move follows from the first player and the number of moves made.
pub struct TurnAlternates;

impl Invariant<Game> for TurnAlternates {
    fn holds(game: &Game) -> bool {
        let first = *game.config().first_player();
        let expected = if game.history().len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

/// All session invariants.
pub type GameInvariants = (MarkedCountConsistent, HistoryMatchesBoard, TurnAlternates);
