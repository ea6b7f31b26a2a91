//! Error types for board input
//!
//! Only text coming from outside (state strings, FEN placement, square names)
//! can fail. Move legality is answered with booleans and never surfaces here.

use thiserror::Error;

/// Errors raised while reading board input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// State string does not hold exactly one character per square
    #[error("Invalid state string length: {length} (must be 64)")]
    InvalidStateLength { length: usize },

    /// State string holds something other than '0' or a piece letter
    #[error("Invalid state character '{character}' at square {square}")]
    InvalidStateCharacter { character: char, square: usize },

    /// FEN placement field is missing
    #[error("No piece placement part found")]
    EmptyFen,

    /// FEN placement holds something other than a piece letter, digit or '/'
    #[error("Invalid FEN character '{character}'")]
    InvalidFenCharacter { character: char },

    /// FEN placement has more than eight ranks
    #[error("Too many ranks in FEN placement")]
    TooManyRanks,

    /// FEN rank describes more than eight files
    #[error("File out of bounds on rank {rank}")]
    FileOutOfBounds { rank: u8 },

    /// FEN placement stops before the last square
    #[error("Incomplete FEN placement")]
    IncompletePlacement,

    /// Square name is not of the form `a1`..`h8`
    #[error("Invalid square name: {name}")]
    InvalidSquareName { name: String },
}

/// Result type alias for board input operations
pub type BoardResult<T> = Result<T, BoardError>;
