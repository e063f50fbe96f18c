use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

use crate::cell::Cell;

/// One bit per grid cell, row-major, `A1` in the least significant bit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct BitBoard(pub u32);

impl BitBoard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self((1 << Cell::COUNT) - 1);

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn has(self, cell: Cell) -> bool {
        !self.is_disjoint(cell.bitboard())
    }

    #[must_use]
    pub const fn is_disjoint(self, other: BitBoard) -> bool {
        self.0 & other.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn try_next_cell(self) -> Option<Cell> {
        if self.is_empty() {
            return None;
        }
        // At most 25 trailing zeros, fits into u8
        Some(Cell(self.0.trailing_zeros() as u8))
    }

    #[must_use]
    pub const fn iter(self) -> BitBoardIter {
        BitBoardIter(self)
    }
}

impl std::fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[derive(Clone)]
pub struct BitBoardIter(BitBoard);

impl Iterator for BitBoardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.0.try_next_cell();
        if let Some(cell) = cell {
            self.0 ^= cell.bitboard();
        }
        cell
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for BitBoardIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for BitBoard {
    type Item = Cell;
    type IntoIter = BitBoardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Cell> for BitBoard {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut res = BitBoard::EMPTY;
        for cell in iter {
            res |= cell.bitboard();
        }
        res
    }
}

macro_rules! impl_math_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait for BitBoard {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self($trait::$fn(self.0, rhs.0))
            }
        }
    )*};
}
impl_math_ops! {
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
}

macro_rules! impl_math_assign_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait for BitBoard {
            fn $fn(&mut self, rhs: Self) {
                $trait::$fn(&mut self.0, rhs.0)
            }
        }
    )*};
}
impl_math_assign_ops! {
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
}

impl Sub for BitBoard {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self & !rhs
    }
}

impl SubAssign for BitBoard {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Complement stays inside the grid so unused high bits never show up as cells.
impl Not for BitBoard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0 & Self::FULL.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_stays_on_grid() {
        let bb = Cell(0).bitboard() | Cell(24).bitboard();
        let inverse = !bb;
        assert_eq!(inverse.len(), Cell::COUNT - 2);
        assert!(!inverse.has(Cell(0)));
        assert!((!BitBoard::FULL).is_empty());
    }

    #[test]
    fn iterates_in_cell_order() {
        let bb: BitBoard = [Cell(12), Cell(3), Cell(20)].into_iter().collect();
        assert_eq!(bb.iter().collect::<Vec<_>>(), vec![Cell(3), Cell(12), Cell(20)]);
        assert_eq!(bb.iter().len(), 3);
    }

    #[test]
    fn subtraction_removes_cells() {
        let a: BitBoard = [Cell(1), Cell(2)].into_iter().collect();
        let b = Cell(2).bitboard();
        assert_eq!(a - b, Cell(1).bitboard());
        assert!(!(a - b).has(Cell(2)));
    }
}
