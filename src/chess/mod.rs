pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod moves;
pub mod query;
pub mod snapshot;

pub use attacks::movegen::*;
pub use bitboard::*;
pub use board::*;
pub use moves::*;
pub use query::*;
pub use snapshot::*;
