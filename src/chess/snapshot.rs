use crate::chess::{bitboard::BitBoard, board::*};

/// Occupancy of the whole board at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub white: BitBoard,
    pub black: BitBoard,
    pub all: BitBoard,
}

impl Snapshot {
    /// Scans every square of `board`. `exclude` is left out of every mask, so a
    /// piece being queried does not count as standing on its own path.
    pub fn build<B: PieceAt + ?Sized>(board: &B, exclude: Option<Square>) -> Snapshot {
        let mut snapshot = Snapshot::default();

        for square in 0..BOARD_SIZE as Square {
            if Some(square) == exclude {
                continue;
            }
            if let Some(piece) = board.piece_at(square) {
                match piece.color {
                    Color::White => snapshot.white.insert(square),
                    Color::Black => snapshot.black.insert(square),
                }
            }
        }

        snapshot.all = snapshot.white | snapshot.black;
        debug_assert!((snapshot.white & snapshot.black).is_empty());
        snapshot
    }

    #[inline(always)]
    pub fn empty(&self) -> BitBoard {
        !self.all
    }
}

/// Everything one generation pass needs. Built fresh for every query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveGenContext {
    pub piece_board: BitBoard,
    pub white_pieces: BitBoard,
    pub black_pieces: BitBoard,
    pub all_pieces: BitBoard,
    pub piece_type: PieceType,
    pub color: Color,
}

impl MoveGenContext {
    pub fn new(snapshot: &Snapshot, piece_board: BitBoard, piece: ChessPiece) -> Self {
        MoveGenContext {
            piece_board,
            white_pieces: snapshot.white,
            black_pieces: snapshot.black,
            all_pieces: snapshot.all,
            piece_type: piece.kind,
            color: piece.color,
        }
    }

    #[inline(always)]
    pub fn enemy_pieces(&self) -> BitBoard {
        match self.color {
            Color::White => self.black_pieces,
            Color::Black => self.white_pieces,
        }
    }

    #[inline(always)]
    pub fn empty_squares(&self) -> BitBoard {
        !self.all_pieces
    }
}
