//! Movement geometry for every piece kind.
//!
//! Offsets are `(row_delta, col_delta)` pairs. Row 0 is Black's back rank,
//! so "north" for White is a negative row delta.

use chess_core::{Color, Piece, Square};

/// Knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// Diagonal directions (bishop).
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal directions (rook).
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// All eight directions (queen and king).
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// How a piece covers the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Pawns follow their own push and capture rules.
    Pawn,
    /// One step along each offset.
    Step(&'static [(i8, i8)]),
    /// Repeated steps along each direction until blocked.
    Ray(&'static [(i8, i8)]),
}

/// Returns the movement pattern of a piece kind.
pub fn reach(piece: Piece) -> Reach {
    match piece {
        Piece::Pawn => Reach::Pawn,
        Piece::Knight => Reach::Step(&KNIGHT_OFFSETS),
        Piece::Bishop => Reach::Ray(&DIAGONALS),
        Piece::Rook => Reach::Ray(&ORTHOGONALS),
        Piece::Queen => Reach::Ray(&ALL_DIRECTIONS),
        Piece::King => Reach::Step(&ALL_DIRECTIONS),
    }
}

/// Returns the two forward-diagonal squares a pawn may capture on.
pub fn pawn_capture_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

/// Walks a ray from `from`, excluding the origin, until the board edge.
pub fn ray(from: Square, (d_row, d_col): (i8, i8)) -> impl Iterator<Item = Square> {
    let mut current = from;
    std::iter::from_fn(move || {
        current = current.offset(d_row, d_col)?;
        Some(current)
    })
}
