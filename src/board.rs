//! The serpentine board numbering.
//!
//! Squares are numbered starting from the bottom left corner, running left to right
//! along the bottom row, then right to left along the row above it, and so on
//! ("boustrophedon"). On the standard 8x8 board the bottom row holds 1..=8, the
//! row above holds 16..=9 reading left to right, and 64 sits in the top left.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;
use crate::types::Square;

/// Side length of the board every observed game uses
pub const STANDARD_SIDE: u8 = 8;

/// Smallest side accepted by [Board::new]
pub const MIN_SIDE: u8 = 2;

/// Largest side accepted by [Board::new]
pub const MAX_SIDE: u8 = 16;

/// A generated board. Cells are stored row major with row 0 at the top.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    side: u8,
    cells: Vec<Square>,
}

impl Board {
    /// Builds a board after checking the side length is supported
    pub fn new(side: u8) -> Result<Self, ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(ConfigError::InvalidBoardSide(side));
        }
        Ok(Self::generate(side))
    }

    /// Builds the serpentine numbering for a `side` x `side` grid.
    pub fn generate(side: u8) -> Self {
        let n = side as usize;
        let mut cells = vec![0; n * n];
        for row in 0..n {
            let from_bottom = n - 1 - row;
            for col in 0..n {
                let offset = if from_bottom % 2 == 0 { col } else { n - 1 - col };
                cells[row * n + col] = (from_bottom * n + offset + 1) as Square;
            }
        }
        Board { side, cells }
    }

    /// the 8x8 board
    pub fn standard() -> Self {
        Self::generate(STANDARD_SIDE)
    }

    #[allow(missing_docs)]
    pub fn side(&self) -> u8 {
        self.side
    }

    /// The terminal square, `side * side`
    pub fn last_square(&self) -> Square {
        let n = self.side as Square;
        n * n
    }

    /// whether `square` is on this board
    pub fn contains(&self, square: Square) -> bool {
        square >= 1 && square <= self.last_square()
    }

    /// The square printed in a cell, row 0 being the top row
    pub fn square_at(&self, row: usize, col: usize) -> Option<Square> {
        let n = self.side as usize;
        if row >= n || col >= n {
            return None;
        }
        Some(self.cells[row * n + col])
    }

    /// The (row, col) of the cell holding `square`. Inverse of [Board::square_at].
    pub fn coordinates_of(&self, square: Square) -> Option<(usize, usize)> {
        if !self.contains(square) {
            return None;
        }
        let n = self.side as usize;
        let index = square as usize - 1;
        let from_bottom = index / n;
        let offset = index % n;
        let col = if from_bottom % 2 == 0 {
            offset
        } else {
            n - 1 - offset
        };
        Some((n - 1 - from_bottom, col))
    }

    /// iterates over the rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.cells.chunks(self.side as usize)
    }

    /// All prime squares on the board, ascending
    pub fn prime_squares(&self) -> Vec<Square> {
        (1..=self.last_square()).filter(|s| is_prime(*s as u32)).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.last_square().to_string().len();
        for row in self.rows() {
            for square in row {
                let marker = if is_prime(*square as u32) { '*' } else { ' ' };
                write!(f, "{:>width$}{} ", square, marker, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// trial division up to the square root
pub fn is_prime(k: u32) -> bool {
    if k < 2 {
        return false;
    }
    if k < 4 {
        return true;
    }
    if k % 2 == 0 {
        return false;
    }
    let mut d = 3;
    while d <= k / d {
        if k % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
