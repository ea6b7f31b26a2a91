pub mod chess;
pub mod error;
pub mod game;
