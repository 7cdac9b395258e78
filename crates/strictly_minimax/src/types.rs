//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player one (cross). Always the maximizer.
    X,
    /// Player two (circle). Always the minimizer.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the minimax role of this player.
    ///
    /// The assignment is fixed to the mark, not to who is driving the
    /// search: `X` maximizes and `O` minimizes even when the automated
    /// opponent plays `X`.
    pub fn role(self) -> Role {
        match self {
            Player::X => Role::Maximizer,
            Player::O => Role::Minimizer,
        }
    }

    /// Terminal score of a position won by this player, from `X`'s point of view.
    pub fn win_score(self) -> i32 {
        match self.role() {
            Role::Maximizer => 1,
            Role::Minimizer => -1,
        }
    }
}

/// Minimax role of a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Keeps the child with the strictly greatest score.
    Maximizer,
    /// Keeps the child with the strictly least score.
    Minimizer,
}

impl Role {
    /// Whether `candidate` should replace `best` under this role.
    ///
    /// Strict comparison: an equal later score never replaces an earlier one.
    pub fn prefers(self, candidate: i32, best: i32) -> bool {
        match self {
            Role::Maximizer => candidate > best,
            Role::Minimizer => candidate < best,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Single-character symbol used by the compact board notation.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_roles_are_fixed_to_marks() {
        assert_eq!(Player::X.role(), Role::Maximizer);
        assert_eq!(Player::O.role(), Role::Minimizer);
        assert_eq!(Player::X.win_score(), 1);
        assert_eq!(Player::O.win_score(), -1);
    }

    #[test]
    fn test_prefers_is_strict() {
        assert!(Role::Maximizer.prefers(1, 0));
        assert!(!Role::Maximizer.prefers(0, 0));
        assert!(Role::Minimizer.prefers(-1, 0));
        assert!(!Role::Minimizer.prefers(0, 0));
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!(Player::from_str("x").unwrap(), Player::X);
        assert_eq!(Player::from_str("O").unwrap(), Player::O);
        assert!(Player::from_str("z").is_err());
        assert_eq!(Player::O.to_string(), "O");
    }
}
