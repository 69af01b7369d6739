//! Rules engine for two-player chess.
//!
//! This crate provides:
//! - Per-piece move generation in raw and legal modes ([`movegen`])
//! - Simulation-based legality, check, checkmate and stalemate tests ([`rules`])
//! - [`GameState`], the selection/move state machine that owns the live board
//! - [`RulesConfig`], TOML configuration of the start position and stalemate rule
//!
//! Castling, en passant, promotion and repetition draws are not modelled.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_engine::GameState;
//!
//! let mut game = GameState::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! println!("Legal moves for e2: {}", game.legal_destinations_for(e2).len());
//! assert!(game.attempt_move(e2, e4).is_committed());
//! assert_eq!(game.status_text(), "Black's turn.");
//! ```

mod config;
mod game;
pub mod movegen;
pub mod rules;

pub use config::{ConfigError, RulesConfig};
pub use game::{GameState, MoveOutcome, Phase, TurnListener};
pub use movegen::{
    all_legal_moves, attacks, generate_moves, legal_moves, make_move, pseudo_moves, GenMode,
    GeneratedMove, Highlight, MoveList,
};
pub use rules::{
    checked_king, has_legal_move, is_checkmate, is_in_check, is_legal_move, is_stalemate,
    Outcome, StalemateRule,
};
