use tracing::trace;

use crate::chess::{
    attacks::{movegen::*, tables},
    bitboard::BitBoard,
    board::*,
    moves::{BitMove, MoveList},
    snapshot::{MoveGenContext, Snapshot},
};

/// Resolves a piece on a board into its candidate moves.
///
/// The returned slice borrows an internal buffer that is cleared on every query,
/// so a result cannot outlive the next call.
pub struct MoveQuery {
    cached_moves: MoveList,
}

impl MoveQuery {
    pub fn new() -> Self {
        tables::ensure_initialized();
        MoveQuery {
            cached_moves: MoveList::new(),
        }
    }

    /// Runs the generator matching `context.piece_type` into the shared buffer.
    pub fn generate_possible_moves(&mut self, context: &MoveGenContext) -> &[BitMove] {
        self.cached_moves.clear();

        let moves = &mut self.cached_moves;
        let empty = context.empty_squares();
        let enemy = context.enemy_pieces();

        match context.piece_type {
            PieceType::Knight => gen_knight_moves(moves, context.piece_board, empty, enemy),
            PieceType::Pawn => {
                gen_pawn_moves(moves, context.piece_board, empty, enemy, context.color)
            }
            PieceType::Bishop => gen_bishop_moves(
                moves,
                context.piece_board,
                empty,
                context.all_pieces,
                enemy,
            ),
            PieceType::King => gen_king_moves(moves, context.piece_board, empty, enemy),
            // No sliding generator is wired for straight lines yet
            PieceType::Rook | PieceType::Queen => {}
        }

        &self.cached_moves
    }

    /// Candidate moves of `piece` standing on `holder`, computed against the current `board`.
    /// A holder that cannot name its square yields no moves.
    pub fn valid_moves_for_piece<B, H>(
        &mut self,
        board: &B,
        piece: ChessPiece,
        holder: &H,
    ) -> &[BitMove]
    where
        B: PieceAt + ?Sized,
        H: SquareIndex + ?Sized,
    {
        let Some(from) = holder.square_index() else {
            trace!("holder has no square index");
            self.cached_moves.clear();
            return &self.cached_moves;
        };

        let snapshot = Snapshot::build(board, Some(from));
        let context = MoveGenContext::new(&snapshot, BitBoard::from_square(from), piece);
        self.generate_possible_moves(&context)
    }
}

impl Default for MoveQuery {
    fn default() -> Self {
        Self::new()
    }
}
