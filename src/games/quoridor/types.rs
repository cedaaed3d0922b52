//! Core domain types for Quoridor.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Most players a board can seat.
pub const MAX_PLAYERS: usize = 4;

/// Walls each player starts with.
pub const STARTING_WALLS: u8 = 10;

/// Player token, in join order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First player, starts on the last row and races to row 0.
    A,
    /// Second player, starts on row 0 and races to the last row.
    B,
    /// Third player, starts on column 0 and races to the last column.
    C,
    /// Fourth player, starts on the last column and races to column 0.
    D,
}

impl Player {
    /// All players in join order.
    pub const ALL: [Player; MAX_PLAYERS] = [Player::A, Player::B, Player::C, Player::D];

    /// Index of this player in join order (0-3).
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
            Player::C => 2,
            Player::D => 3,
        }
    }

    /// Creates a player from its join-order index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter symbol used on the rendered board.
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
            Player::C => 'C',
            Player::D => 'D',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell coordinate on the grid, or a slot coordinate in a wall lattice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Position {
    /// Shifts the position, returning `None` if either coordinate would go negative.
    ///
    /// Upper bounds are the board's business.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Manhattan distance between two positions.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Wall orientation.
///
/// A vertical wall at `(r, c)` sits between cells `(r, c)` and `(r, c + 1)`;
/// a horizontal wall at `(r, c)` sits between `(r, c)` and `(r + 1, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Orientation {
    /// Blocks vertical steps.
    Horizontal,
    /// Blocks horizontal steps.
    Vertical,
}

impl Orientation {
    /// Letter used in the textual action encoding.
    pub fn letter(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }

    /// Parses `H`/`V` in either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a player's token.
    Occupied(Player),
}
