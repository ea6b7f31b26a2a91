use crate::error::{BoardError, BoardResult};

pub const BOARD_WIDTH: usize = 8;
pub const BOARD_SIZE: usize = 64;

pub type Square = u8;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn toggle(self) -> Color {
        [Color::White, Color::Black][self as usize ^ 1]
    }

    pub fn from_index(index: usize) -> Option<Color> {
        match index {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row step of a pawn advance. Every color-relative row constant is derived from this.
    #[inline(always)]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row the color's pieces start on.
    #[inline(always)]
    pub const fn back_rank(self) -> i8 {
        if self.forward() > 0 {
            0
        } else {
            BOARD_WIDTH as i8 - 1
        }
    }

    /// Row the color's pawns start on, the only row a double push is allowed from.
    #[inline(always)]
    pub const fn home_rank(self) -> i8 {
        self.back_rank() + self.forward()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(u8)]
pub enum PieceType {
    #[default]
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    pub fn from_char(letter: char) -> Option<PieceType> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub fn from_index(index: u8) -> Option<PieceType> {
        PIECE_TYPES.get(index.checked_sub(1)? as usize).copied()
    }
}

pub const PIECE_TYPES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

/// A piece as the board sees it: what it is and whose it is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ChessPiece {
    pub kind: PieceType,
    pub color: Color,
}

impl ChessPiece {
    /// Offset added to the type index for the second color in the packed tag.
    pub const BLACK_TAG: u8 = 128;

    pub const fn new(kind: PieceType, color: Color) -> Self {
        ChessPiece { kind, color }
    }

    /// Packed form: 1..=6 for white, 129..=134 for black.
    pub fn to_tag(self) -> u8 {
        let base = self.kind as u8;
        match self.color {
            Color::White => base,
            Color::Black => base + Self::BLACK_TAG,
        }
    }

    pub fn from_tag(tag: u8) -> Option<ChessPiece> {
        let color = if tag & Self::BLACK_TAG != 0 {
            Color::Black
        } else {
            Color::White
        };
        let kind = PieceType::from_index(tag & !Self::BLACK_TAG)?;
        Some(ChessPiece { kind, color })
    }

    /// Uppercase letter for white, lowercase for black.
    pub fn to_notation(self) -> char {
        let letter = self.kind.to_char();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_notation(letter: char) -> Option<ChessPiece> {
        let kind = PieceType::from_char(letter)?;
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(ChessPiece { kind, color })
    }
}

/// Anything that can report which piece stands on a square.
pub trait PieceAt {
    fn piece_at(&self, square: Square) -> Option<ChessPiece>;
}

/// A board cell that knows its own linear index.
pub trait SquareIndex {
    fn square_index(&self) -> Option<Square>;
}

impl SquareIndex for Square {
    fn square_index(&self) -> Option<Square> {
        (*self < BOARD_SIZE as Square).then_some(*self)
    }
}

pub const RANKS: [u64; BOARD_WIDTH] = [
    0xFF,
    0xFF00,
    0xFF0000,
    0xFF000000,
    0xFF00000000,
    0xFF0000000000,
    0xFF000000000000,
    0xFF00000000000000,
];

#[inline(always)]
pub fn to_square(rank: i8, file: i8) -> Square {
    debug_assert!(valid_axis(rank) && valid_axis(file));
    ((rank * BOARD_WIDTH as i8) + file) as Square
}

#[inline(always)]
pub fn rank_of(square: Square) -> i8 {
    square as i8 / BOARD_WIDTH as i8
}

#[inline(always)]
pub fn file_of(square: Square) -> i8 {
    square as i8 % BOARD_WIDTH as i8
}

#[inline(always)]
pub fn valid_axis(axis: i8) -> bool {
    axis >= 0 && axis < BOARD_WIDTH as i8
}

#[inline(always)]
pub fn bit(square: Square) -> u64 {
    1u64 << square
}

/// `a1`..`h8`, file letter from the column and rank digit from the row.
pub fn square_name(square: Square) -> String {
    format!(
        "{}{}",
        (b'a' + file_of(square) as u8) as char,
        rank_of(square) + 1
    )
}

pub fn parse_square(name: &str) -> BoardResult<Square> {
    let invalid = || BoardError::InvalidSquareName {
        name: name.to_string(),
    };
    let mut chars = name.chars();

    match (chars.next(), chars.next(), chars.next()) {
        (Some(file_char @ 'a'..='h'), Some(rank_char @ '1'..='8'), None) => {
            let file = (file_char as u8 - b'a') as i8;
            let rank = (rank_char as u8 - b'1') as i8;
            Ok(to_square(rank, file))
        }
        _ => Err(invalid()),
    }
}
