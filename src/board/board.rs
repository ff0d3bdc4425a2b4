//! Board grid

use super::{Player, Pos, Square, BOARD_SIZE};

/// Grid of intersections, indexed `[row][col]`.
///
/// Holds occupancy only; move order lives in the engine's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get square at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Square {
        self.squares[pos.row()][pos.col()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// `true` if `pos` holds a stone of `player`
    #[inline]
    pub fn is_player(&self, pos: Pos, player: Player) -> bool {
        self.get(pos) == Square::Occupied(player)
    }

    /// Place a stone. No rule checking happens here.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        self.squares[pos.row()][pos.col()] = Square::Occupied(player);
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.squares[pos.row()][pos.col()] = Square::Empty;
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Square; BOARD_SIZE]> {
        self.squares.iter()
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| !sq.is_empty())
            .count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.squares.iter().flatten().all(|sq| sq.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
