use tracing::info;

use crate::chess::{BitMove, Color};

/// Handle of one of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    color: Color,
}

impl Player {
    pub fn number(self) -> usize {
        self.color.index()
    }

    pub fn color(self) -> Color {
        self.color
    }
}

/// Whose move it is, plus the moves played so far.
#[derive(Clone, Debug)]
pub struct Turn {
    side_to_move: Color,
    move_number: u32,
    history: Vec<BitMove>,
}

impl Default for Turn {
    fn default() -> Self {
        Turn {
            side_to_move: Color::White,
            move_number: 1,
            history: Vec::new(),
        }
    }
}

impl Turn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn player_for(&self, color: Color) -> Player {
        Player { color }
    }

    /// `None` for anything but 0 and 1.
    pub fn player_at(&self, player_number: usize) -> Option<Player> {
        Color::from_index(player_number).map(|color| self.player_for(color))
    }

    /// Full-move counter, bumped once the second player has moved.
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn history(&self) -> &[BitMove] {
        &self.history
    }

    /// Records a finished move and hands the move to the other side.
    pub fn end_turn(&mut self, mov: BitMove) {
        self.history.push(mov);
        if self.side_to_move == Color::Black {
            self.move_number += 1;
        }
        self.side_to_move = self.side_to_move.toggle();
        info!(
            "Turn: {:?} - Move #{}",
            self.side_to_move, self.move_number
        );
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
