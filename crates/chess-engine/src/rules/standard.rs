//! Standard rules without castling, en passant or promotion.

use crate::movegen::{attacks, filtered_moves, make_move, pseudo_moves};
use chess_core::{Board, Color, Move, Square};
use tracing::warn;

/// Returns true if moving `from` -> `to` keeps `color`'s king safe.
///
/// The move is applied to a clone regardless of whose turn it is or whether
/// the piece can geometrically make it; only king safety is judged.
pub fn is_legal_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let after = make_move(board, Move::new(from, to));
    !is_in_check(&after, color)
}

/// Returns true if any opposing piece attacks `color`'s king.
///
/// A board without that king counts as check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        warn!(%color, board = %board.to_fen_placement(), "king missing, treating as check");
        return true;
    };
    board
        .pieces(color.opposite())
        .any(|(from, _)| attacks(board, from, king))
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(from, _)| {
        pseudo_moves(board, from)
            .iter()
            .any(|m| is_legal_move(board, from, m.to(), color))
    })
}

/// Returns true if `color` is in check and has no legal move.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

/// Returns true if `color` is not in check but has no legal move.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, color)
}

/// Returns the square of `color`'s king if it is currently in check.
pub fn checked_king(board: &Board, color: Color) -> Option<Square> {
    let king = board.find_king(color)?;
    is_in_check(board, color).then_some(king)
}

/// Counts the legal moves of `color` without annotating them.
pub(crate) fn count_legal_moves(board: &Board, color: Color) -> usize {
    board
        .pieces(color)
        .map(|(from, _)| filtered_moves(board, from, color).len())
        .sum()
}
