//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Without castling, en passant and promotion the standard start-position
//! values hold through depth 4.

use super::{filtered_moves, make_move};
use crate::rules::count_legal_moves;
use chess_core::{Board, Color};

/// Counts the number of leaf nodes at the given depth, `color` to move.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    if depth == 1 {
        return count_legal_moves(board, color) as u64;
    }

    let mut nodes = 0u64;
    for (from, _) in board.pieces(color) {
        for m in &filtered_moves(board, from, color) {
            let after = make_move(board, m.mov());
            nodes += perft(&after, color.opposite(), depth - 1);
        }
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    let mut results = Vec::new();

    for (from, _) in board.pieces(color) {
        for m in &filtered_moves(board, from, color) {
            let after = make_move(board, m.mov());
            let nodes = if depth > 1 {
                perft(&after, color.opposite(), depth - 1)
            } else {
                1
            };
            results.push((m.mov().to_uci(), nodes));
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
