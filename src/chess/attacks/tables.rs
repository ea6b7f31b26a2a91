use crate::chess::{attacks::movegen::gen_jumping_attacks, bitboard::BitBoard, board::*};
use std::sync::LazyLock;

#[derive(Copy, Clone, Debug)]
pub struct Offset {
    pub rank: i8,
    pub file: i8,
}

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset { rank: 2, file: 1 },
    Offset { rank: 1, file: 2 },
    Offset { rank: -1, file: 2 },
    Offset { rank: -2, file: 1 },
    Offset { rank: -2, file: -1 },
    Offset { rank: -1, file: -2 },
    Offset { rank: 1, file: -2 },
    Offset { rank: 2, file: -1 },
];

pub const KING_OFFSETS: [Offset; 8] = [
    Offset { rank: 1, file: 0 },
    Offset { rank: 1, file: 1 },
    Offset { rank: 0, file: 1 },
    Offset { rank: -1, file: 1 },
    Offset { rank: -1, file: 0 },
    Offset { rank: -1, file: -1 },
    Offset { rank: 0, file: -1 },
    Offset { rank: 1, file: -1 },
];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [
    Offset { rank: 1, file: 1 },   // northeast
    Offset { rank: 1, file: -1 },  // northwest
    Offset { rank: -1, file: 1 },  // southeast
    Offset { rank: -1, file: -1 }, // southwest
];

/// Diagonal capture offsets for a pawn of `color`, left file first.
#[inline(always)]
pub const fn pawn_capture_offsets(color: Color) -> [Offset; 2] {
    let forward = color.forward();
    [
        Offset {
            rank: forward,
            file: -1,
        },
        Offset {
            rank: forward,
            file: 1,
        },
    ]
}

pub static KNIGHT_ATTACKS: LazyLock<[BitBoard; BOARD_SIZE]> = LazyLock::new(|| {
    tracing::debug!("building knight attack table");
    std::array::from_fn(|square| gen_jumping_attacks(square as Square, &KNIGHT_OFFSETS))
});

/// Builds the lookup tables if they are not built yet. Safe to call any number of times.
pub fn ensure_initialized() {
    LazyLock::force(&KNIGHT_ATTACKS);
}

#[inline(always)]
pub fn knight_attacks(square: Square) -> BitBoard {
    KNIGHT_ATTACKS[square as usize]
}
