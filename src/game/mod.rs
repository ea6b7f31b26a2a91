//! Interactive game layer
//!
//! `ChessGame` owns the grid, the turn tracker, the move query and the current
//! selection. Every click or drop runs to completion and leaves the game in one
//! of two states: nothing held, or one piece held with its destinations lit.
//! Legality is recomputed from the live board at selection time and again right
//! before a move is committed, so a lit square never outlives a board change.

pub mod grid;
pub mod selection;
pub mod turn;

pub use grid::*;
pub use selection::*;
pub use turn::*;

use tracing::{debug, info, trace, warn};

use crate::chess::*;
use crate::error::BoardResult;

/// Edge length of one square in display units.
pub const PIECE_SIZE: f32 = 80.0;

pub struct ChessGame {
    grid: Grid,
    turn: Turn,
    query: MoveQuery,
    selection: Selection,
    initial_state: String,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// An empty board with the first player to move. Call [`ChessGame::set_up_board`] for the start position.
    pub fn new() -> Self {
        let grid = Grid::new(PIECE_SIZE);
        let initial_state = grid.state_string();
        ChessGame {
            grid,
            turn: Turn::new(),
            query: MoveQuery::new(),
            selection: Selection::Idle,
            initial_state,
        }
    }

    pub fn set_up_board(&mut self) {
        self.stop_game();
        self.turn.reset();

        let loaded = self.load_fen(STARTPOS_FEN);
        debug_assert!(loaded.is_ok(), "start position must parse");
        if let Err(e) = loaded {
            warn!("start position rejected: {e}");
        }
        self.initial_state = self.state_string();
        info!("board set up");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// A new piece of `kind` owned by player `player_number`, or `None` if there is no such player.
    pub fn piece_for_player(&self, player_number: usize, kind: PieceType) -> Option<Bit> {
        let owner = self.turn.player_at(player_number)?;
        Some(Bit {
            piece: ChessPiece::new(kind, owner.color()),
            owner,
        })
    }

    pub fn owner_at(&self, x: i8, y: i8) -> Option<Player> {
        self.grid.square(x, y)?.bit().map(|bit| bit.owner)
    }

    /// Candidate moves of whatever stands on `source`. Empty when the square is empty.
    pub fn valid_moves(&mut self, source: Square) -> &[BitMove] {
        match self.grid.piece_at(source) {
            Some(piece) => self.query.valid_moves_for_piece(&self.grid, piece, &source),
            None => &[],
        }
    }

    /// Squares holding a piece of the side to move that has at least one candidate.
    pub fn movable_squares(&mut self) -> Vec<Square> {
        let mut squares = Vec::new();
        for square in 0..BOARD_SIZE as Square {
            if let Some(piece) = self.grid.piece_at(square)
                && self.can_bit_move_from(piece, square)
            {
                squares.push(square);
            }
        }
        squares
    }

    /// True when `piece` belongs to the side to move and has somewhere to go from `source`.
    pub fn can_bit_move_from(&mut self, piece: ChessPiece, source: Square) -> bool {
        piece.color == self.turn.side_to_move()
            && !self
                .query
                .valid_moves_for_piece(&self.grid, piece, &source)
                .is_empty()
    }

    /// True when `source -> destination` is among the freshly generated candidates of `piece`.
    pub fn can_bit_move_from_to(
        &mut self,
        piece: ChessPiece,
        source: Square,
        destination: Square,
    ) -> bool {
        piece.color == self.turn.side_to_move()
            && self
                .query
                .valid_moves_for_piece(&self.grid, piece, &source)
                .iter()
                .any(|mov| mov.from == source && mov.to == destination)
    }

    /// A click on `square`, routed to the piece or empty-square path.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        match self.grid.piece_at(square) {
            Some(piece) => self.clicked_bit(piece, square),
            None => self.action_for_empty_holder(square),
        }
    }

    pub fn clicked_bit(&mut self, piece: ChessPiece, square: Square) -> ClickOutcome {
        if let Selection::Selected { source, .. } = self.selection {
            if source == square {
                self.deselect();
                debug!("selection toggled off at {}", square_name(square));
                return ClickOutcome::Deselected;
            }

            if piece.color != self.turn.side_to_move() {
                if let Some(mov) = self.try_commit(square) {
                    return ClickOutcome::Moved(mov);
                }
                debug!("invalid capture attempt on {}", square_name(square));
                self.deselect();
                return ClickOutcome::Deselected;
            }
        }

        if self.can_bit_move_from(piece, square) {
            return self.select(piece, square);
        }

        trace!("{} cannot move from {}", piece.to_notation(), square_name(square));
        if self.selection.is_selected() {
            self.deselect();
            ClickOutcome::Deselected
        } else {
            ClickOutcome::Ignored
        }
    }

    /// A click on an empty square: commits the held piece there if legal, otherwise lets go of it.
    pub fn action_for_empty_holder(&mut self, square: Square) -> ClickOutcome {
        if !self.selection.is_selected() {
            return ClickOutcome::Ignored;
        }
        if let Some(mov) = self.try_commit(square) {
            return ClickOutcome::Moved(mov);
        }
        self.deselect();
        ClickOutcome::Deselected
    }

    /// Dropping the held piece on `square`. A rejected drop changes nothing.
    pub fn drop_on(&mut self, square: Square) -> ClickOutcome {
        match self.try_commit(square) {
            Some(mov) => ClickOutcome::Moved(mov),
            None => ClickOutcome::Ignored,
        }
    }

    /// Notifies the turn tracker that `mov` has been played.
    pub fn bit_moved_from_to(&mut self, mov: BitMove) {
        info!("Moved {:?} {}", mov.piece, mov.to_uci());
        self.turn.end_turn(mov);
    }

    fn select(&mut self, piece: ChessPiece, source: Square) -> ClickOutcome {
        self.clear_board_highlights();

        let destinations = self
            .query
            .valid_moves_for_piece(&self.grid, piece, &source)
            .iter()
            .fold(BitBoard::EMPTY, |mask, mov| {
                mask | BitBoard::from_square(mov.to)
            });

        destinations.for_each_bit(|to| {
            if let Some(square) = self.grid.square_by_index_mut(to) {
                square.set_highlighted(true);
            }
        });

        self.selection = Selection::Selected { piece, source };
        debug!(
            "selected {} on {} with {} destinations",
            piece.to_notation(),
            square_name(source),
            destinations.count()
        );

        ClickOutcome::Selected {
            source,
            destinations: destinations.count() as usize,
        }
    }

    fn deselect(&mut self) {
        self.clear_board_highlights();
        self.selection = Selection::Idle;
    }

    /// Moves the held piece to `destination` if the square is lit and the move is
    /// still generated from the current board. Leaves everything untouched otherwise.
    fn try_commit(&mut self, destination: Square) -> Option<BitMove> {
        let Selection::Selected { piece, source } = self.selection else {
            return None;
        };

        let highlighted = self
            .grid
            .square_by_index(destination)
            .is_some_and(ChessSquare::is_highlighted);
        if !highlighted {
            debug!("{} is not a highlighted square", square_name(destination));
            return None;
        }

        if self.grid.piece_at(source) != Some(piece)
            || !self.can_bit_move_from_to(piece, source, destination)
        {
            debug!(
                "stale move {}{} rejected",
                square_name(source),
                square_name(destination)
            );
            return None;
        }

        let mov = BitMove::new(source, destination, piece.kind);
        self.clear_board_highlights();

        let moving = self
            .grid
            .square_by_index_mut(source)
            .and_then(ChessSquare::take_bit);
        if let Some(target) = self.grid.square_by_index_mut(destination) {
            if let Some(captured) = target.take_bit() {
                info!(
                    "captured {} on {}",
                    captured.piece.to_notation(),
                    square_name(destination)
                );
            }
            target.set_bit(moving);
        }

        self.selection = Selection::Idle;
        self.bit_moved_from_to(mov);
        Some(mov)
    }

    fn clear_board_highlights(&mut self) {
        self.grid.clear_highlights();
    }

    /// Removes every piece and lets go of any selection.
    pub fn stop_game(&mut self) {
        self.grid.clear();
        self.selection = Selection::Idle;
    }

    /// Win detection is not part of this game layer.
    pub fn check_for_winner(&self) -> Option<Player> {
        None
    }

    pub fn check_for_draw(&self) -> bool {
        false
    }

    pub fn initial_state_string(&self) -> &str {
        &self.initial_state
    }

    pub fn state_string(&self) -> String {
        self.grid.state_string()
    }

    pub fn set_state_string(&mut self, state: &str) -> BoardResult<()> {
        let turn = &self.turn;
        self.grid
            .set_state_string(state, |color| turn.player_for(color))?;
        self.selection = Selection::Idle;
        Ok(())
    }

    pub fn load_fen(&mut self, fen: &str) -> BoardResult<()> {
        let turn = &self.turn;
        self.grid.load_fen(fen, |color| turn.player_for(color))?;
        self.selection = Selection::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        parse_square(name).unwrap()
    }

    fn started() -> ChessGame {
        let mut game = ChessGame::new();
        game.set_up_board();
        game
    }

    fn put(game: &mut ChessGame, square: Square, piece: ChessPiece) {
        let owner = game.turn.player_for(piece.color);
        game.grid
            .square_by_index_mut(square)
            .unwrap()
            .set_bit(Some(Bit { piece, owner }));
    }

    #[test]
    fn lit_square_blocked_after_selection_is_rejected() {
        let mut game = started();
        let pawn = ChessPiece::new(PieceType::Pawn, Color::White);

        game.click(sq("e2"));
        put(&mut game, sq("e3"), ChessPiece::new(PieceType::Knight, Color::Black));
        assert!(game.grid.square_by_index(sq("e3")).unwrap().is_highlighted());
        let before = game.state_string();

        assert_eq!(game.drop_on(sq("e3")), ClickOutcome::Ignored);
        assert_eq!(game.state_string(), before);
        assert_eq!(
            game.selection,
            Selection::Selected {
                piece: pawn,
                source: sq("e2")
            }
        );
        assert!(game.turn.history().is_empty());

        // e4 is still lit but the pawn can no longer jump the blocker
        assert_eq!(game.drop_on(sq("e4")), ClickOutcome::Ignored);
        assert_eq!(game.state_string(), before);
    }

    #[test]
    fn held_piece_gone_from_source_cannot_commit() {
        let mut game = started();

        game.click(sq("g1"));
        game.grid.square_by_index_mut(sq("g1")).unwrap().destroy_bit();
        let before = game.state_string();

        assert_eq!(game.drop_on(sq("f3")), ClickOutcome::Ignored);
        assert_eq!(game.state_string(), before);
        assert_eq!(game.grid.piece_at(sq("f3")), None);
        assert_eq!(game.turn.side_to_move(), Color::White);
    }

    #[test]
    fn click_on_stale_target_lets_go() {
        let mut game = started();

        game.click(sq("e2"));
        put(&mut game, sq("e3"), ChessPiece::new(PieceType::Knight, Color::Black));
        let before = game.state_string();

        assert_eq!(game.click(sq("e3")), ClickOutcome::Deselected);
        assert_eq!(game.selection, Selection::Idle);
        assert!(game.grid.highlighted().is_empty());
        assert_eq!(game.state_string(), before);
    }
}
