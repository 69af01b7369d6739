//! FEN (Forsyth-Edwards Notation) piece placement parsing and serialization.
//!
//! Only the piece placement field matters to this crate: there is no
//! castling, en passant or move clock state to describe. A full six-field
//! FEN string is accepted and everything after the first field is ignored.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Standard starting placement.
pub const STARTPOS_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors that can occur when parsing FEN piece placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: empty string")]
    Empty,

    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid piece placement: invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: usize },

    #[error("invalid piece placement: rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: usize, squares: usize },
}

/// Parses a placement field into `(square, piece, color)` triples.
pub(crate) fn parse_placement(fen: &str) -> Result<Vec<(Square, Piece, Color)>, FenError> {
    let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount(ranks.len()));
    }

    let mut pieces = Vec::with_capacity(32);
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row;
        let mut col = 0usize;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                col += digit as usize;
            } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    pieces.push((sq, piece, color));
                }
                col += 1;
            } else {
                return Err(FenError::InvalidCharacter { character: c, rank });
            }
        }
        if col != 8 {
            return Err(FenError::InvalidRankLength { rank, squares: col });
        }
    }

    Ok(pieces)
}

/// Serializes a placement, `lookup` giving the occupant of each square.
pub(crate) fn write_placement<F>(lookup: F) -> String
where
    F: Fn(Square) -> Option<(Piece, Color)>,
{
    let mut fen = String::with_capacity(64);

    for row in 0..8u8 {
        let mut empty_count = 0;
        for col in 0..8u8 {
            let occupant = Square::new(row, col).and_then(&lookup);
            if let Some((piece, color)) = occupant {
                if empty_count > 0 {
                    fen.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                fen.push(piece.to_fen_char(color));
            } else {
                empty_count += 1;
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if row < 7 {
            fen.push('/');
        }
    }

    fen
}
