//! Move generation.
//!
//! Every piece kind goes through one geometric routine,
//! [`generate_moves`], parameterized by [`GenMode`]:
//!
//! - [`GenMode::Raw`] returns geometric reachability only. Check detection
//!   is built on this mode, so it never consults the legality filter.
//! - [`GenMode::Legal`] additionally drops moves that leave the mover's king
//!   attacked and annotates each survivor with its check/checkmate effect.

pub mod attacks;
pub mod perft;

use crate::rules::{has_legal_move, is_in_check, is_legal_move};
use attacks::{pawn_capture_squares, ray, reach, Reach};
use chess_core::{Board, Color, Move, Square};
use serde::{Deserialize, Serialize};

/// Which moves [`generate_moves`] should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    /// Geometrically reachable destinations, ignoring king safety.
    Raw,
    /// Destinations that keep the mover's king safe, with annotations.
    Legal,
}

/// How the presentation layer should highlight a destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Quiet,
    Capture,
    Check,
    Checkmate,
}

/// A generated move together with the facts derived from the board it was
/// generated on.
///
/// The flags have no setters: they are only ever computed by the generator.
/// In [`GenMode::Raw`] only the capture flag is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedMove {
    #[serde(flatten)]
    mov: Move,
    capture: bool,
    gives_check: bool,
    gives_checkmate: bool,
}

impl GeneratedMove {
    const NULL: GeneratedMove = GeneratedMove::quiet(Move::new(Square::A8, Square::A8));

    const fn quiet(mov: Move) -> Self {
        GeneratedMove {
            mov,
            capture: false,
            gives_check: false,
            gives_checkmate: false,
        }
    }

    /// Returns the underlying from/to move.
    #[inline]
    pub const fn mov(&self) -> Move {
        self.mov
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(&self) -> Square {
        self.mov.from()
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(&self) -> Square {
        self.mov.to()
    }

    /// True if the destination holds an opposing piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.capture
    }

    /// True if the move puts the opponent in check.
    #[inline]
    pub const fn gives_check(&self) -> bool {
        self.gives_check
    }

    /// True if the move checkmates the opponent.
    #[inline]
    pub const fn gives_checkmate(&self) -> bool {
        self.gives_checkmate
    }

    /// Classifies the move for display; the strongest effect wins.
    pub const fn highlight(&self) -> Highlight {
        if self.gives_checkmate {
            Highlight::Checkmate
        } else if self.gives_check {
            Highlight::Check
        } else if self.capture {
            Highlight::Capture
        } else {
            Highlight::Quiet
        }
    }
}

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [GeneratedMove; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves in any chess position.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [GeneratedMove::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, m: GeneratedMove) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    fn extend(&mut self, other: &MoveList) {
        for m in other {
            self.push(*m);
        }
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[GeneratedMove] {
        &self.moves[..self.len]
    }

    /// Iterates over the moves; the list can be walked any number of times.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedMove> {
        self.as_slice().iter()
    }

    /// Returns the move landing on `to`, if any.
    pub fn find(&self, to: Square) -> Option<GeneratedMove> {
        self.iter().find(|m| m.to() == to).copied()
    }

    /// Returns true if some move lands on `to`.
    pub fn reaches(&self, to: Square) -> bool {
        self.iter().any(|m| m.to() == to)
    }

    /// Retains only moves for which the predicate returns true.
    fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&GeneratedMove) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = GeneratedMove;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a GeneratedMove;
    type IntoIter = std::slice::Iter<'a, GeneratedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the moves of the piece standing on `from`.
///
/// An empty square yields an empty list. The order is deterministic for a
/// given board.
pub fn generate_moves(board: &Board, from: Square, mode: GenMode) -> MoveList {
    match mode {
        GenMode::Raw => pseudo_moves(board, from),
        GenMode::Legal => legal_moves(board, from),
    }
}

/// Generates geometrically reachable moves, ignoring king safety.
pub fn pseudo_moves(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    let Some((piece, color)) = board.piece_at(from) else {
        return moves;
    };

    match reach(piece) {
        Reach::Pawn => generate_pawn_moves(board, from, color, &mut moves),
        Reach::Step(offsets) => {
            for &(d_row, d_col) in offsets {
                if let Some(to) = from.offset(d_row, d_col) {
                    add_target(board, from, to, color, &mut moves);
                }
            }
        }
        Reach::Ray(directions) => {
            for &dir in directions {
                for to in ray(from, dir) {
                    if !add_target(board, from, to, color, &mut moves) {
                        break;
                    }
                }
            }
        }
    }

    moves
}

/// Generates the legal moves of the piece on `from`, annotated with
/// capture, check and checkmate flags.
pub fn legal_moves(board: &Board, from: Square) -> MoveList {
    let Some(color) = board.color_of(from) else {
        return MoveList::new();
    };
    let them = color.opposite();

    let mut moves = filtered_moves(board, from, color);
    for m in moves.moves[..moves.len].iter_mut() {
        m.capture = board.color_of(m.to()) == Some(them);
        let after = make_move(board, m.mov);
        m.gives_check = is_in_check(&after, them);
        m.gives_checkmate = m.gives_check && !has_legal_move(&after, them);
    }
    moves
}

/// Legal moves of every piece of one color.
pub fn all_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, _) in board.pieces(color) {
        moves.extend(&legal_moves(board, from));
    }
    moves
}

/// Returns true if the piece on `from` attacks `target`.
///
/// Uses raw generation only, so it is safe to call from check detection.
pub fn attacks(board: &Board, from: Square, target: Square) -> bool {
    pseudo_moves(board, from).reaches(target)
}

/// Plays a move on a copy of the board and returns the copy.
///
/// The move is applied unconditionally: whatever stands on `to` is replaced.
pub fn make_move(board: &Board, m: Move) -> Board {
    let mut after = board.clone();
    after.move_piece(m.from(), m.to());
    after
}

/// Raw moves with self-check violations removed, without annotations.
pub(crate) fn filtered_moves(board: &Board, from: Square, color: Color) -> MoveList {
    let mut moves = pseudo_moves(board, from);
    moves.retain(|m| is_legal_move(board, from, m.to(), color));
    moves
}

/// Records `to` unless a friendly piece blocks it.
///
/// Returns true if the square was empty, i.e. a ray may continue past it.
fn add_target(board: &Board, from: Square, to: Square, color: Color, moves: &mut MoveList) -> bool {
    match board.color_of(to) {
        Some(c) if c == color => false,
        occupant => {
            let mut m = GeneratedMove::quiet(Move::new(from, to));
            m.capture = occupant.is_some();
            moves.push(m);
            occupant.is_none()
        }
    }
}

/// Generates pawn pushes and diagonal captures. No en passant, no promotion.
fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    let dir = color.pawn_direction();

    // Pushes
    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty_at(sq)) {
        add_target(board, from, one, color, moves);
        if from.row() == color.pawn_start_row() {
            if let Some(two) = from.offset(2 * dir, 0).filter(|&sq| board.is_empty_at(sq)) {
                add_target(board, from, two, color, moves);
            }
        }
    }

    // Captures
    for to in pawn_capture_squares(from, color) {
        if board.color_of(to) == Some(color.opposite()) {
            add_target(board, from, to, color, moves);
        }
    }
}
