use crate::chess::{
    attacks::tables::{self, Offset},
    bitboard::BitBoard,
    board::*,
    moves::{BitMove, MoveList},
};

pub fn gen_jumping_attacks(square: Square, offsets: &[Offset]) -> BitBoard {
    debug_assert!(square < BOARD_SIZE as u8);

    let rank = rank_of(square);
    let file = file_of(square);

    offsets.iter().fold(BitBoard::EMPTY, |attacks, offset| {
        let (r, f) = (rank + offset.rank, file + offset.file);
        if valid_axis(r) && valid_axis(f) {
            attacks | BitBoard::from_square(to_square(r, f))
        } else {
            attacks
        }
    })
}

#[inline(always)]
fn step(square: Square, offset: Offset) -> Option<Square> {
    let (r, f) = (rank_of(square) + offset.rank, file_of(square) + offset.file);
    (valid_axis(r) && valid_axis(f)).then(|| to_square(r, f))
}

pub fn gen_knight_moves(
    moves: &mut MoveList,
    knight_board: BitBoard,
    empty_squares: BitBoard,
    enemy_pieces: BitBoard,
) {
    let reachable = empty_squares | enemy_pieces;

    for from in knight_board.ones_iter() {
        let targets = tables::knight_attacks(from) & reachable;
        for to in targets.ones_iter() {
            moves.push(BitMove::new(from, to, PieceType::Knight));
        }
    }
}

/// Pushes first (single, then double from the home rank), then diagonal captures left to right.
pub fn gen_pawn_moves(
    moves: &mut MoveList,
    pawn_board: BitBoard,
    empty_squares: BitBoard,
    enemy_pieces: BitBoard,
    color: Color,
) {
    let forward = Offset {
        rank: color.forward(),
        file: 0,
    };

    for from in pawn_board.ones_iter() {
        if let Some(single) = step(from, forward)
            && empty_squares.contains(single)
        {
            moves.push(BitMove::new(from, single, PieceType::Pawn));

            if rank_of(from) == color.home_rank()
                && let Some(double) = step(single, forward)
                && empty_squares.contains(double)
            {
                moves.push(BitMove::new(from, double, PieceType::Pawn));
            }
        }

        for offset in tables::pawn_capture_offsets(color) {
            if let Some(target) = step(from, offset)
                && enemy_pieces.contains(target)
            {
                moves.push(BitMove::new(from, target, PieceType::Pawn));
            }
        }
    }
}

/// Walks each diagonal until the edge or the first occupied square, which is kept only if it is an enemy.
pub fn gen_bishop_moves(
    moves: &mut MoveList,
    bishop_board: BitBoard,
    empty_squares: BitBoard,
    all_pieces: BitBoard,
    enemy_pieces: BitBoard,
) {
    debug_assert!((empty_squares & all_pieces).is_empty());

    for from in bishop_board.ones_iter() {
        for direction in tables::BISHOP_DIRECTIONS {
            let mut cursor = from;

            while let Some(target) = step(cursor, direction) {
                if empty_squares.contains(target) {
                    moves.push(BitMove::new(from, target, PieceType::Bishop));
                    cursor = target;
                    continue;
                }

                if all_pieces.contains(target) && enemy_pieces.contains(target) {
                    moves.push(BitMove::new(from, target, PieceType::Bishop));
                }
                break;
            }
        }
    }
}

pub fn gen_king_moves(
    moves: &mut MoveList,
    king_board: BitBoard,
    empty_squares: BitBoard,
    enemy_pieces: BitBoard,
) {
    let reachable = empty_squares | enemy_pieces;

    for from in king_board.ones_iter() {
        for offset in tables::KING_OFFSETS {
            if let Some(target) = step(from, offset)
                && reachable.contains(target)
            {
                moves.push(BitMove::new(from, target, PieceType::King));
            }
        }
    }
}
