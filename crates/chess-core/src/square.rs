//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a string is not a square in algebraic notation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid square: '{0}'")]
pub struct SquareParseError(pub String);

/// A square on the chess board, addressed by `(row, col)`.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
/// (rank 1). Column 0 is the a-file. Internally the square is stored as
/// `row * 8 + col`:
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a1 = 56, ..., h1 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, or `None` when off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, treating anything outside
    /// `0..8` as off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Self::new(b'8' - rank, file - b'a')
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7), 0 being rank 8.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7), 0 being the a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::from_coords(self.row() as i8 + d_row, self.col() as i8 + d_col)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }

    // Common squares
    pub const A8: Square = Square(0);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const H1: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_algebraic()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::from_algebraic(&s).ok_or(SquareParseError(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let e1 = Square::new(7, 4).unwrap();
        assert_eq!(e1, Square::E1);
        assert_eq!(e1.row(), 7);
        assert_eq!(e1.col(), 4);
        assert_eq!(e1.index(), 60);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_from_coords() {
        assert_eq!(Square::from_coords(0, 0), Some(Square::A8));
        assert_eq!(Square::from_coords(-1, 3), None);
        assert_eq!(Square::from_coords(3, -1), None);
        assert_eq!(Square::from_coords(3, 8), None);
    }

    #[test]
    fn square_offset() {
        assert_eq!(Square::E1.offset(-1, 0), Square::from_algebraic("e2"));
        assert_eq!(Square::E1.offset(1, 0), None);
        assert_eq!(Square::A8.offset(0, -1), None);
        assert_eq!(Square::A8.offset(1, 1), Square::from_algebraic("b7"));
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Some(Square::A8));
        assert_eq!(Square::from_algebraic("e1"), Some(Square::E1));
        assert_eq!(Square::from_algebraic("H1"), Some(Square::H1));
        assert_eq!(Square::from_algebraic("e4"), Square::new(4, 4));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A8.to_algebraic(), "a8");
        assert_eq!(Square::H1.to_algebraic(), "h1");
        assert_eq!(Square::new(6, 4).unwrap().to_algebraic(), "e2");
    }

    #[test]
    fn all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A8);
        assert_eq!(squares[63], Square::H1);
    }

    #[test]
    fn string_conversion() {
        assert_eq!(String::from(Square::D1), "d1");
        assert_eq!(Square::try_from("d8".to_string()), Ok(Square::D8));
        assert_eq!(
            Square::try_from("z9".to_string()),
            Err(SquareParseError("z9".to_string()))
        );
    }
}
