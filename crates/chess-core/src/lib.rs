//! Core types for chess.
//!
//! This crate provides the board model used by the rules engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Move`] for a from/to pair
//! - [`Board`], the 8x8 grid of pieces
//! - FEN piece placement parsing and serialization

mod board;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use fen::{FenError, STARTPOS_PLACEMENT};
pub use mov::Move;
pub use piece::Piece;
pub use square::{Square, SquareParseError};
