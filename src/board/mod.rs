//! Board geometry for Renju

pub mod board;


use std::fmt;

pub use board::Board;

use crate::error::OutOfBounds;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// The opening move must land here
pub const CENTER: Pos = Pos { row: 7, col: 7 };

/// Line axes used by run counting, in fixed order.
///
/// Each entry is a `(d_row, d_col)` step; the opposite half of the axis is
/// walked by negating it.
pub const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),   // Horizontal
    (-1, 1),  // Anti-diagonal
    (-1, 0),  // Vertical
    (-1, -1), // Main diagonal
];

/// Players. `First` opens the game and is bound by the forbidden-move rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Number used in transcripts (1 = First, 2 = Second)
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::First),
            2 => Some(Player::Second),
            _ => None,
        }
    }

    /// Player to move after `turn` entries have been recorded
    #[inline]
    pub fn for_turn(turn: usize) -> Player {
        if turn % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => f.write_str("First"),
            Player::Second => f.write_str("Second"),
        }
    }
}

/// Occupancy of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Occupied(Player),
}

impl Square {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(p) => Some(p),
        }
    }
}

/// Position on the board.
///
/// Always inside the board: the only ways to build one are the checked
/// constructors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Build a position, rejecting anything outside `0..BOARD_SIZE`.
    pub fn new(row: i32, col: i32) -> Result<Self, OutOfBounds> {
        if Self::is_valid(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < TOTAL_CELLS {
            Some(Self {
                row: (idx / BOARD_SIZE) as u8,
                col: (idx % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `steps` times along `(dr, dc)`; `None` once off the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8, steps: i32) -> Option<Pos> {
        let r = self.row as i32 + dr as i32 * steps;
        let c = self.col as i32 + dc as i32 * steps;
        Pos::new(r, c).ok()
    }

    /// Every position in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).filter_map(Pos::from_index)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
