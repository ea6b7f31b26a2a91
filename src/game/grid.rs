use tracing::debug;

use crate::chess::*;
use crate::error::{BoardError, BoardResult};
use crate::game::turn::Player;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Character stored for an empty square in a state string.
pub const EMPTY_NOTATION: char = '0';

/// A piece placed on the board together with the player that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bit {
    pub piece: ChessPiece,
    pub owner: Player,
}

/// One cell of the grid.
#[derive(Clone, Debug, Default)]
pub struct ChessSquare {
    column: u8,
    row: u8,
    bit: Option<Bit>,
    highlighted: bool,
    position: (f32, f32),
}

impl ChessSquare {
    pub fn bit(&self) -> Option<&Bit> {
        self.bit.as_ref()
    }

    pub fn set_bit(&mut self, bit: Option<Bit>) {
        self.bit = bit;
    }

    pub fn take_bit(&mut self) -> Option<Bit> {
        self.bit.take()
    }

    pub fn destroy_bit(&mut self) {
        self.bit = None;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Display position of the square's center. Not interpreted by the board.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }
}

impl SquareIndex for ChessSquare {
    fn square_index(&self) -> Option<Square> {
        let (row, col) = (self.row as i8, self.column as i8);
        (valid_axis(row) && valid_axis(col)).then(|| to_square(row, col))
    }
}

/// The 8x8 board of cells, indexed `row * 8 + col` with row 0 at the first player's side.
#[derive(Clone, Debug)]
pub struct Grid {
    squares: Vec<ChessSquare>,
}

impl Grid {
    pub fn new(square_size: f32) -> Self {
        let squares = (0..BOARD_SIZE as Square)
            .map(|square| {
                let (row, col) = (rank_of(square) as u8, file_of(square) as u8);
                let top = (BOARD_WIDTH as u8 - 1 - row) as f32;
                ChessSquare {
                    column: col,
                    row,
                    bit: None,
                    highlighted: false,
                    position: (
                        col as f32 * square_size + square_size / 2.0,
                        top * square_size + square_size / 2.0,
                    ),
                }
            })
            .collect();

        Grid { squares }
    }

    pub fn square(&self, x: i8, y: i8) -> Option<&ChessSquare> {
        (valid_axis(x) && valid_axis(y)).then(|| &self.squares[to_square(y, x) as usize])
    }

    pub fn square_by_index(&self, square: Square) -> Option<&ChessSquare> {
        self.squares.get(square as usize)
    }

    pub fn square_by_index_mut(&mut self, square: Square) -> Option<&mut ChessSquare> {
        self.squares.get_mut(square as usize)
    }

    pub fn bit_at(&self, square: Square) -> Option<&Bit> {
        self.square_by_index(square)?.bit()
    }

    /// Visits squares in index order, passing `(x, y)` alongside.
    pub fn for_each_square_mut(&mut self, mut f: impl FnMut(&mut ChessSquare, u8, u8)) {
        for square in &mut self.squares {
            let (x, y) = (square.column, square.row);
            f(square, x, y);
        }
    }

    pub fn highlighted(&self) -> BitBoard {
        let mut mask = BitBoard::EMPTY;
        for (index, square) in self.squares.iter().enumerate() {
            if square.highlighted {
                mask.insert(index as Square);
            }
        }
        mask
    }

    pub fn clear_highlights(&mut self) {
        self.for_each_square_mut(|square, _, _| square.set_highlighted(false));
    }

    pub fn clear(&mut self) {
        self.for_each_square_mut(|square, _, _| {
            square.destroy_bit();
            square.set_highlighted(false);
        });
    }

    /// One character per square from row 0 col 0 upward.
    pub fn state_string(&self) -> String {
        self.squares
            .iter()
            .map(|square| {
                square
                    .bit()
                    .map_or(EMPTY_NOTATION, |bit| bit.piece.to_notation())
            })
            .collect()
    }

    /// Replaces every square from a state string. The board is untouched when the string is rejected.
    pub fn set_state_string(
        &mut self,
        state: &str,
        owner: impl Fn(Color) -> Player,
    ) -> BoardResult<()> {
        let characters: Vec<char> = state.chars().collect();
        if characters.len() != BOARD_SIZE {
            return Err(BoardError::InvalidStateLength {
                length: characters.len(),
            });
        }

        let mut pieces: [Option<ChessPiece>; BOARD_SIZE] = [None; BOARD_SIZE];
        for (square, &character) in characters.iter().enumerate() {
            if character == EMPTY_NOTATION {
                continue;
            }
            let piece = ChessPiece::from_notation(character)
                .ok_or(BoardError::InvalidStateCharacter { character, square })?;
            pieces[square] = Some(piece);
        }

        self.place(pieces, owner);

        debug!("state loaded: {state}");
        Ok(())
    }

    /// Reads the piece placement field of a FEN string, ranks from row 7 down to row 0.
    /// Any further fields are ignored.
    pub fn load_fen(&mut self, fen: &str, owner: impl Fn(Color) -> Player) -> BoardResult<()> {
        let placement = fen.split_whitespace().next().ok_or(BoardError::EmptyFen)?;

        let mut pieces: [Option<ChessPiece>; BOARD_SIZE] = [None; BOARD_SIZE];
        let mut rank: u8 = BOARD_WIDTH as u8 - 1;
        let mut file: u8 = 0;

        for chr in placement.chars() {
            match chr {
                '/' => {
                    if rank == 0 {
                        return Err(BoardError::TooManyRanks);
                    }
                    if file != BOARD_WIDTH as u8 {
                        return Err(BoardError::IncompletePlacement);
                    }
                    rank -= 1;
                    file = 0;
                }
                c @ '1'..='9' => {
                    file += c as u8 - b'0';
                    if file > BOARD_WIDTH as u8 {
                        return Err(BoardError::FileOutOfBounds { rank });
                    }
                }
                c => {
                    let piece = ChessPiece::from_notation(c)
                        .ok_or(BoardError::InvalidFenCharacter { character: c })?;
                    if file >= BOARD_WIDTH as u8 {
                        return Err(BoardError::FileOutOfBounds { rank });
                    }
                    pieces[to_square(rank as i8, file as i8) as usize] = Some(piece);
                    file += 1;
                }
            }
        }

        if rank != 0 || file != BOARD_WIDTH as u8 {
            return Err(BoardError::IncompletePlacement);
        }

        self.place(pieces, owner);

        debug!("fen loaded: {placement}");
        Ok(())
    }

    fn place(&mut self, pieces: [Option<ChessPiece>; BOARD_SIZE], owner: impl Fn(Color) -> Player) {
        for (square, piece) in self.squares.iter_mut().zip(pieces) {
            square.set_bit(piece.map(|piece| Bit {
                piece,
                owner: owner(piece.color),
            }));
            square.set_highlighted(false);
        }
    }

    /// Text diagram, rank 8 on top. Highlighted empty squares show as `*`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * 3);

        for row in (0..BOARD_WIDTH as i8).rev() {
            out.push((b'1' + row as u8) as char);
            out.push(' ');
            for col in 0..BOARD_WIDTH as i8 {
                let square = &self.squares[to_square(row, col) as usize];
                let glyph = match (square.bit(), square.is_highlighted()) {
                    (Some(bit), _) => bit.piece.to_notation(),
                    (None, true) => '*',
                    (None, false) => '.',
                };
                out.push(glyph);
                if col + 1 < BOARD_WIDTH as i8 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h");
        out
    }
}

impl PieceAt for Grid {
    fn piece_at(&self, square: Square) -> Option<ChessPiece> {
        self.bit_at(square).map(|bit| bit.piece)
    }
}
