//! Turn-taking game session between a human and the search engine.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::search::SearchEngine;
use crate::types::Player;
use tracing::{debug, info, instrument, warn};

/// A game in progress.
///
/// Owns the live board. Each real move is exactly one placement; the engine
/// only ever sees copies.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    engine: SearchEngine,
    config: GameConfig,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            to_move: *config.first_player(),
            engine: SearchEngine::new(*config.ai_player()),
            config,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the configuration the game was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the automated opponent.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Terminal status of the board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Checks if the game is decided.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Checks if the automated opponent is on move in an undecided game.
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.engine.player()
    }

    /// Places the side-to-move's mark at `pos` and passes the turn.
    ///
    /// Returns the outcome after the move.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game is decided, and
    /// [`GameError::IllegalMove`] if the square is taken. Neither changes the game.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<Outcome, GameError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }

        self.board.place_at(pos, self.to_move)?;
        self.history.push(pos);
        self.to_move = self.to_move.opponent();
        self.check_invariants();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
        } else {
            debug!(position = %pos, "Move applied");
        }
        Ok(outcome)
    }

    /// Lets the automated opponent move.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game is decided, and
    /// [`GameError::NotAiTurn`] when the human is on move.
    #[instrument(skip(self))]
    pub fn ai_move(&mut self) -> Result<Position, GameError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }
        if self.to_move != self.engine.player() {
            return Err(GameError::NotAiTurn);
        }

        let pos = self.engine.choose(&self.board)?;
        self.make_move(pos)?;
        Ok(pos)
    }

    /// Starts over with the same configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Restarting game");
        *self = Self::new(self.config.clone());
    }

    fn check_invariants(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
