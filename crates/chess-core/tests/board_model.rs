//! Board model behaviour across the public API.

use chess_core::{Board, Color, Move, Piece, Square, STARTPOS_PLACEMENT};
use proptest::prelude::*;

fn arb_occupant() -> impl Strategy<Value = Option<(Piece, Color)>> {
    prop_oneof![
        3 => Just(None),
        1 => (0usize..6, any::<bool>()).prop_map(|(kind, white)| {
            let color = if white { Color::White } else { Color::Black };
            Some((Piece::ALL[kind], color))
        }),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(arb_occupant(), 64).prop_map(|cells| {
        let mut board = Board::empty();
        for (sq, cell) in Square::all().zip(cells) {
            if let Some((piece, color)) = cell {
                board.set(sq, piece, color);
            }
        }
        board
    })
}

proptest! {
    #[test]
    fn placement_survives_fen(board in arb_board()) {
        let fen = board.to_fen_placement();
        prop_assert_eq!(Board::from_fen_placement(&fen).unwrap(), board);
    }

    #[test]
    fn simulation_never_touches_the_original(
        board in arb_board(),
        from in 0u8..64,
        to in 0u8..64,
    ) {
        let from = Square::from_index(from).unwrap();
        let to = Square::from_index(to).unwrap();
        let before = board.to_fen_placement();
        let mut sim = board.clone();
        sim.move_piece(from, to);
        prop_assert_eq!(board.to_fen_placement(), before);
    }

    #[test]
    fn off_board_reads_are_empty(row in -20i8..20, col in -20i8..20) {
        let board = Board::startpos();
        let on_board = (0..8).contains(&row) && (0..8).contains(&col);
        if !on_board {
            prop_assert_eq!(board.piece_at_coords(row, col), None);
        }
    }
}

#[test]
fn board_serializes_as_placement() {
    let json = serde_json::to_string(&Board::startpos()).unwrap();
    assert_eq!(json, format!("\"{}\"", STARTPOS_PLACEMENT));
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Board::startpos());
    assert!(serde_json::from_str::<Board>("\"8/8\"").is_err());
}

#[test]
fn move_serializes_with_algebraic_squares() {
    let m = Move::from_uci("e2e4").unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"from":"e2","to":"e4"}"#);
    assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), m);
}

#[test]
fn color_and_piece_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"black\"");
    assert_eq!(serde_json::to_string(&Piece::Knight).unwrap(), "\"knight\"");
}
