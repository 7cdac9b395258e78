//! The 3x3 board.

use crate::error::{IllegalMove, ParseBoardError};
use crate::outcome::{self, Line, Outcome};
use crate::position::Position;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// A plain value: copying it is how the search explores hypothetical
/// futures without touching the caller's board. The only mutation is
/// [`Board::place`], which updates one square and the marked count together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Square; 9]", into = "[Square; 9]")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Number of occupied squares.
    marked: u8,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            marked: 0,
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn marked(&self) -> usize {
        usize::from(self.marked)
    }

    /// Places `player`'s mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::OutOfRange`] if either coordinate is above 2, and
    /// [`IllegalMove::Occupied`] if the square already holds a mark. The
    /// board is unchanged on error.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), IllegalMove> {
        let pos = Position::from_coords(row, col).ok_or(IllegalMove::OutOfRange { row, col })?;
        self.place_at(pos, player)
    }

    /// Places `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::Occupied`] if the square already holds a mark.
    pub fn place_at(&mut self, pos: Position, player: Player) -> Result<(), IllegalMove> {
        let square = &mut self.squares[pos.to_index()];
        if !square.is_empty() {
            return Err(IllegalMove::Occupied(pos));
        }
        *square = Square::Occupied(player);
        self.marked += 1;
        debug_assert_eq!(self.marked(), self.count_occupied());
        Ok(())
    }

    /// Copy of this board with `player`'s mark on the empty square `pos`.
    pub(crate) fn with_mark(&self, pos: Position, player: Player) -> Board {
        debug_assert!(self.get(pos).is_empty(), "{pos} is occupied");
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next.marked += 1;
        next
    }

    /// Checks if the square at `(row, col)` is empty.
    ///
    /// Off-board coordinates are never empty.
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        Position::from_coords(row, col).is_some_and(|pos| self.get(pos).is_empty())
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_empty())
    }

    /// Empty positions in row-major order, collected.
    pub fn list_empty_cells(&self) -> Vec<Position> {
        self.empty_cells().collect()
    }

    /// Checks if all nine squares are occupied.
    pub fn is_full(&self) -> bool {
        self.marked == 9
    }

    /// Checks if no square is occupied.
    pub fn is_empty(&self) -> bool {
        self.marked == 0
    }

    /// Terminal status of the position.
    pub fn outcome(&self) -> Outcome {
        outcome::outcome(self)
    }

    /// The first completed line in scan order and its owner.
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        outcome::winning_line(self)
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Side to move assuming `X` started and turns alternated.
    pub fn inferred_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Compact notation: nine symbols, row-major, rows separated by spaces.
    pub fn notation(&self) -> String {
        self.squares
            .chunks(3)
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    fn count_occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Square; 9]> for Board {
    fn from(squares: [Square; 9]) -> Self {
        let mut board = Self { squares, marked: 0 };
        board.marked = board.count_occupied() as u8;
        board
    }
}

impl From<Board> for [Square; 9] {
    fn from(board: Board) -> Self {
        board.squares
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine symbols row-major: `X`/`O` (any case) for marks and
    /// `.`, `-` or `_` for empty. Whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != 9 {
            return Err(ParseBoardError::Length(symbols.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(symbols) {
            *square = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(ParseBoardError::Symbol(other)),
            };
        }
        Ok(squares.into())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
