use tinyvec::ArrayVec;

use crate::chess::board::*;

/// Upper bound on candidates produced by a single generation pass.
pub const MAX_MOVES: usize = 256;

pub type MoveList = ArrayVec<[BitMove; MAX_MOVES]>;

/// A candidate move: origin, destination and the type of the piece that moves.
/// Carries no capture flag, a capture is whatever stands on `to` when it is committed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct BitMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceType,
}

impl BitMove {
    #[inline(always)]
    pub fn new(from: Square, to: Square, piece: PieceType) -> Self {
        debug_assert!(from < BOARD_SIZE as u8 && to < BOARD_SIZE as u8);
        BitMove { from, to, piece }
    }

    pub fn to_uci(self) -> String {
        format!("{}{}", square_name(self.from), square_name(self.to))
    }
}
