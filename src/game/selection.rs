use crate::chess::{BitMove, ChessPiece, Square};

/// What the player currently holds. Replaced as a whole on every transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected { piece: ChessPiece, source: Square },
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected { .. })
    }

    pub fn source(&self) -> Option<Square> {
        match self {
            Selection::Selected { source, .. } => Some(*source),
            Selection::Idle => None,
        }
    }
}

/// What a click or drop did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was picked up and `destinations` squares lit.
    Selected { source: Square, destinations: usize },
    /// The held piece was put back down without moving.
    Deselected,
    /// The held piece moved.
    Moved(BitMove),
    /// Nothing changed.
    Ignored,
}

impl ClickOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, ClickOutcome::Moved(_))
    }
}
