//! Legality, check and checkmate rules.
//!
//! Legality is decided by simulation: the move is played on a clone of the
//! board and the mover's king is tested for attack afterwards. Attack tests
//! only ever use raw move generation, which keeps check detection and the
//! legality filter from recursing into each other.

mod standard;

pub use standard::{
    checked_king, has_legal_move, is_checkmate, is_in_check, is_legal_move, is_stalemate,
};
pub(crate) use standard::count_legal_moves;

use chess_core::Color;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The side to move was checkmated.
    Checkmate { winner: Color },
    /// The side to move had no legal move and was not in check.
    Stalemate,
}

impl Outcome {
    /// Returns the winning color, or `None` for a draw.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

/// What happens when the side to move has no legal move and is not in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalemateRule {
    /// The game ends in a draw.
    #[default]
    Draw,
    /// The game stays open with the same side to move.
    Continue,
}
