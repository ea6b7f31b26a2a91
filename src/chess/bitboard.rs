use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::chess::board::{BOARD_SIZE, Square, bit};

/// Occupancy mask over the 64 squares, bit `i` set when square `i` is in the set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const EMPTY: BitBoard = BitBoard(0);

    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        BitBoard(value)
    }

    #[inline(always)]
    pub fn from_square(square: Square) -> Self {
        debug_assert!(square < BOARD_SIZE as Square);
        BitBoard(bit(square))
    }

    #[inline(always)]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub fn set_value(&mut self, value: u64) {
        self.0 = value;
    }

    #[inline(always)]
    pub fn contains(self, square: Square) -> bool {
        self.0 & bit(square) != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, square: Square) {
        self.0 |= bit(square);
    }

    #[inline(always)]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !bit(square);
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub fn ones_iter(self) -> BitboardOnesIter {
        self.0.ones_iter()
    }

    /// Calls `f` with every set square, lowest first. The board itself is not touched.
    #[inline]
    pub fn for_each_bit(self, mut f: impl FnMut(Square)) {
        for square in self.ones_iter() {
            f(square);
        }
    }
}

impl From<u64> for BitBoard {
    fn from(value: u64) -> Self {
        BitBoard(value)
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    #[inline(always)]
    fn bitor(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitBoard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: BitBoard) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BitBoard {
    type Output = BitBoard;

    #[inline(always)]
    fn bitand(self, rhs: BitBoard) -> BitBoard {
        BitBoard(self.0 & rhs.0)
    }
}

impl BitAndAssign for BitBoard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: BitBoard) {
        self.0 &= rhs.0;
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    #[inline(always)]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

pub trait BitboardOnes: Sized + Copy {
    fn ones_iter(self) -> BitboardOnesIter;
}

pub struct BitboardOnesIter {
    bitboard: u64,
}

impl Iterator for BitboardOnesIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard == 0 {
            None
        } else {
            let sq = self.bitboard.trailing_zeros() as Square;
            self.bitboard &= self.bitboard - 1; // clear lowest set bit
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let pop = self.bitboard.count_ones() as usize;
        (pop, Some(pop))
    }
}

impl ExactSizeIterator for BitboardOnesIter {}

impl BitboardOnes for u64 {
    fn ones_iter(self) -> BitboardOnesIter {
        BitboardOnesIter { bitboard: self }
    }
}
