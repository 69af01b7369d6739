//! The 8x8 board.

use crate::fen::{parse_placement, write_placement, STARTPOS_PLACEMENT};
use crate::{Color, FenError, Piece, Square};
use std::fmt;

/// An 8x8 grid where each square is empty or holds one colored piece.
///
/// The board owns its cells by value, so a clone is a fully independent
/// copy. Speculative moves are always played on a clone.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<(Piece, Color)>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for color in Color::ALL {
            for (col, piece) in back_rank.into_iter().enumerate() {
                board.put(color.back_row(), col as u8, piece, color);
                board.put(color.pawn_start_row(), col as u8, Piece::Pawn, color);
            }
        }
        board
    }

    fn put(&mut self, row: u8, col: u8, piece: Piece, color: Color) {
        if let Some(sq) = Square::new(row, col) {
            self.set(sq, piece, color);
        }
    }

    /// Creates a board from a FEN piece placement (or a full FEN string).
    pub fn from_fen_placement(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        for (sq, piece, color) in parse_placement(fen)? {
            board.set(sq, piece, color);
        }
        Ok(board)
    }

    /// Converts the board to a FEN piece placement string.
    pub fn to_fen_placement(&self) -> String {
        write_placement(|sq| self.piece_at(sq))
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize]
    }

    /// Returns the piece at signed coordinates; off-board reads as empty.
    #[inline]
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<(Piece, Color)> {
        Square::from_coords(row, col).and_then(|sq| self.piece_at(sq))
    }

    /// Returns the color of the piece on the square, or `None` if empty.
    #[inline]
    pub fn color_of(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(_, color)| color)
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places a piece, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece, color: Color) {
        self.squares[sq.index() as usize] = Some((piece, color));
    }

    /// Empties the square, returning its previous occupant.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize].take()
    }

    /// Moves whatever stands on `from` to `to`, overwriting the destination.
    ///
    /// No rule is checked. Returns the piece that was on `to` before.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<(Piece, Color)> {
        let moving = self.clear(from);
        std::mem::replace(&mut self.squares[to.index() as usize], moving)
    }

    /// Finds the king of the given color with a linear scan.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((Piece::King, color)))
    }

    /// Iterates over the squares and kinds of all pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((piece, c)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let cell = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |(piece, color)| piece.glyph(color));
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen_placement())
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_fen_placement()
    }
}

impl TryFrom<String> for Board {
    type Error = FenError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::from_fen_placement(&s)
    }
}

impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fen_placement())
    }
}

impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let placement = String::deserialize(deserializer)?;
        Board::from_fen_placement(&placement).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_layout() {
        let board = Board::startpos();
        assert_eq!(board.count(), 32);
        assert_eq!(board.piece_at(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(board.piece_at(Square::E8), Some((Piece::King, Color::Black)));
        assert_eq!(board.piece_at(Square::D1), Some((Piece::Queen, Color::White)));
        assert_eq!(board.piece_at(sq("b8")), Some((Piece::Knight, Color::Black)));
        assert_eq!(board.piece_at(sq("h2")), Some((Piece::Pawn, Color::White)));
        assert_eq!(board.piece_at(sq("e4")), None);
    }

    #[test]
    fn startpos_matches_fen() {
        assert_eq!(Board::startpos().to_fen_placement(), STARTPOS_PLACEMENT);
        assert_eq!(
            Board::from_fen_placement(STARTPOS_PLACEMENT).unwrap(),
            Board::startpos()
        );
    }

    #[test]
    fn custom_fen_roundtrip() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let board = Board::from_fen_placement(fen).unwrap();
        assert_eq!(board.to_fen_placement(), fen);
    }

    #[test]
    fn piece_at_coords_off_board_is_empty() {
        let board = Board::startpos();
        assert_eq!(board.piece_at_coords(7, 4), Some((Piece::King, Color::White)));
        assert_eq!(board.piece_at_coords(-1, 4), None);
        assert_eq!(board.piece_at_coords(8, 4), None);
        assert_eq!(board.piece_at_coords(0, 8), None);
    }

    #[test]
    fn color_of() {
        let board = Board::startpos();
        assert_eq!(board.color_of(Square::A1), Some(Color::White));
        assert_eq!(board.color_of(Square::A8), Some(Color::Black));
        assert_eq!(board.color_of(sq("d5")), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::startpos();
        let mut copy = original.clone();
        copy.move_piece(sq("e2"), sq("e4"));
        assert_eq!(original.piece_at(sq("e2")), Some((Piece::Pawn, Color::White)));
        assert_eq!(original.piece_at(sq("e4")), None);
        assert_eq!(copy.piece_at(sq("e4")), Some((Piece::Pawn, Color::White)));
        assert_ne!(original, copy);
    }

    #[test]
    fn move_piece_overwrites_destination() {
        let mut board = Board::from_fen_placement("8/8/8/3p4/4R3/8/8/8").unwrap();
        let captured = board.move_piece(sq("e4"), sq("d5"));
        assert_eq!(captured, Some((Piece::Pawn, Color::Black)));
        assert_eq!(board.piece_at(sq("d5")), Some((Piece::Rook, Color::White)));
        assert!(board.is_empty_at(sq("e4")));
        assert_eq!(board.count(), 1);
    }

    #[test]
    fn find_king() {
        let board = Board::startpos();
        assert_eq!(board.find_king(Color::White), Some(Square::E1));
        assert_eq!(board.find_king(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn pieces_of_one_color() {
        let board = Board::startpos();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert!(board
            .pieces(Color::Black)
            .all(|(sq, _)| sq.row() <= 1));
    }

    #[test]
    fn display_grid() {
        let text = Board::startpos().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "♜♞♝♛♚♝♞♜");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "♖♘♗♕♔♗♘♖");
    }

    #[test]
    fn string_conversion() {
        let text: String = Board::startpos().into();
        assert_eq!(text, STARTPOS_PLACEMENT);
        assert!(Board::try_from("bad".to_string()).is_err());
    }
}
