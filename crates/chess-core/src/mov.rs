//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move of one piece from one square to another.
///
/// There are no special move kinds: castling, en passant and promotion are
/// not part of the rules this crate models.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the UCI notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from UCI notation.
    ///
    /// A trailing promotion letter is rejected since pawns never promote.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        let from = Square::from_algebraic(s.get(0..2)?)?;
        let to = Square::from_algebraic(s.get(2..4)?)?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
