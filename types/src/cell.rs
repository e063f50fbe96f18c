use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bitboard::BitBoard;

/// A cell of the 5x5 grid, row-major, so `Cell(0)` is `A1` and `Cell(24)` is `E5`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Cell(pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a cell, expected a column A-E followed by a row 1-5")]
pub struct ParseCellError(pub String);

impl Cell {
    pub const SIZE: u8 = 5;
    pub const COUNT: usize = (Self::SIZE * Self::SIZE) as usize;

    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < Self::SIZE && col < Self::SIZE);
        Self(row * Self::SIZE + col)
    }

    #[must_use]
    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIZE
    }

    #[must_use]
    #[inline(always)]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIZE
    }

    #[must_use]
    #[inline(always)]
    pub const fn bitboard(self) -> BitBoard {
        BitBoard(1 << self.0)
    }

    /// Orthogonally adjacent cells.
    #[must_use]
    pub const fn neighbours(self) -> BitBoard {
        let mut bits = 0;
        if self.row() > 0 {
            bits |= 1 << (self.0 - Self::SIZE);
        }
        if self.row() < Self::SIZE - 1 {
            bits |= 1 << (self.0 + Self::SIZE);
        }
        if self.col() > 0 {
            bits |= 1 << (self.0 - 1);
        }
        if self.col() < Self::SIZE - 1 {
            bits |= 1 << (self.0 + 1);
        }
        BitBoard(bits)
    }

    #[must_use]
    pub fn distance_to(self, other: Cell) -> u8 {
        self.row().abs_diff(other.row()) + self.col().abs_diff(other.col())
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'A' + self.col()) as char, self.row() + 1)
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellError(s.to_owned());
        let mut chars = s.trim().chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };
        let col = match col.to_ascii_uppercase() {
            c @ 'A'..='E' => c as u8 - b'A',
            _ => return Err(err()),
        };
        let row = match row {
            r @ '1'..='5' => r as u8 - b'1',
            _ => return Err(err()),
        };
        Ok(Cell::new(row, col))
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.to_string()
    }
}

impl TryFrom<String> for Cell {
    type Error = ParseCellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Cell(0).to_string(), "A1");
        assert_eq!(Cell::new(0, 4).to_string(), "E1");
        assert_eq!(Cell::new(2, 2).to_string(), "C3");
        assert_eq!(Cell(24).to_string(), "E5");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("c3".parse::<Cell>(), Ok(Cell::new(2, 2)));
        assert_eq!("A5".parse::<Cell>(), Ok(Cell::new(4, 0)));
        assert!("F1".parse::<Cell>().is_err());
        assert!("A6".parse::<Cell>().is_err());
        assert!("A10".parse::<Cell>().is_err());
        assert!("".parse::<Cell>().is_err());
    }

    #[test]
    fn corner_has_two_neighbours() {
        let corner = Cell(0);
        assert_eq!(corner.neighbours().len(), 2);
        assert!(corner.neighbours().has(Cell(1)));
        assert!(corner.neighbours().has(Cell(5)));
        // No wrap around from the end of one row to the start of the next
        assert!(!Cell(4).neighbours().has(Cell(5)));
    }

    #[test]
    fn centre_has_four_neighbours() {
        assert_eq!(Cell::new(2, 2).neighbours().len(), 4);
    }

    #[test]
    fn distance() {
        assert_eq!(Cell(0).distance_to(Cell(24)), 8);
        assert_eq!(Cell::new(2, 2).distance_to(Cell::new(2, 2)), 0);
    }
}
