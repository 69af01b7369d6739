//! Game state and the selection/move state machine.
//!
//! [`GameState`] owns the live board and is the only thing that mutates it.
//! Every input (a selection, a move attempt, a reset) runs to completion
//! before returning; rejected input leaves the board untouched.
//!
//! ```text
//! AwaitingSelection --select own piece--> PieceSelected(sq)
//! PieceSelected --legal destination--> AwaitingSelection | GameOver
//! PieceSelected --anything else------> AwaitingSelection
//! any --reset--> AwaitingSelection
//! ```

use crate::config::RulesConfig;
use crate::movegen::{legal_moves, GeneratedMove, MoveList};
use crate::rules::{checked_king, has_legal_move, is_in_check, Outcome, StalemateRule};
use chess_core::{Board, Color, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the game stands in its input cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "square", rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the side to move to pick a piece.
    AwaitingSelection,
    /// A piece of the side to move is selected.
    PieceSelected(Square),
    /// Terminal until reset.
    GameOver(Outcome),
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played.
    Committed(GeneratedMove),
    /// Nothing happened on the board; any selection was cleared.
    Rejected,
}

impl MoveOutcome {
    /// Returns true if the move was played.
    pub const fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed(_))
    }
}

/// Receives a notification each time the turn passes to the other side.
///
/// This is the seam for a chess clock: the clock owns its own timers and
/// only needs to know when to switch.
pub trait TurnListener {
    /// Called once per committed move with the new side to move.
    fn turn_changed(&mut self, to_move: Color);
}

impl<F: FnMut(Color)> TurnListener for F {
    fn turn_changed(&mut self, to_move: Color) {
        self(to_move)
    }
}

/// The authoritative state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Color,
    in_check: bool,
    checkmate: bool,
    phase: Phase,
    config: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new game from the configured start position, White to move.
    pub fn with_config(config: RulesConfig) -> Self {
        let board = config.start_position.clone();
        Self::from_board(board, Color::White, config)
    }

    /// Creates a game from an arbitrary board.
    ///
    /// Check, checkmate and stalemate are evaluated for `to_move` at once,
    /// so a finished position starts out as [`Phase::GameOver`].
    pub fn from_board(board: Board, to_move: Color, config: RulesConfig) -> Self {
        let mut state = GameState {
            board,
            turn: to_move,
            in_check: false,
            checkmate: false,
            phase: Phase::AwaitingSelection,
            config,
        };
        state.refresh_status();
        state
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns true if the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Returns true if the side to move has been checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the configuration this game was created with.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns the selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::PieceSelected(sq) => Some(sq),
            _ => None,
        }
    }

    /// Returns how the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns the square of the side to move's king when it is in check.
    pub fn checked_king(&self) -> Option<Square> {
        checked_king(&self.board, self.turn)
    }

    /// Selects the piece on `sq`.
    ///
    /// Ignored (returning false) if the square is empty, holds an opposing
    /// piece, or the game is over. Selecting another own piece replaces the
    /// current selection.
    pub fn select_square(&mut self, sq: Square) -> bool {
        if self.is_game_over() || self.board.color_of(sq) != Some(self.turn) {
            return false;
        }
        debug!(square = %sq, turn = %self.turn, "piece selected");
        self.phase = Phase::PieceSelected(sq);
        true
    }

    /// Clears the selection, if any.
    pub fn deselect(&mut self) {
        if let Phase::PieceSelected(_) = self.phase {
            self.phase = Phase::AwaitingSelection;
        }
    }

    /// Tap-to-move: selects when nothing is selected, otherwise tries to move
    /// the selected piece to `sq`.
    ///
    /// Returns the move outcome when a move was attempted.
    pub fn tap(&mut self, sq: Square) -> Option<MoveOutcome> {
        match self.selected() {
            Some(from) => Some(self.attempt_move(from, sq)),
            None => {
                self.select_square(sq);
                None
            }
        }
    }

    /// Legal destinations of the piece on `sq`, for highlighting.
    ///
    /// Empty unless `sq` holds a piece of the side to move and the game is
    /// still running.
    pub fn legal_destinations_for(&self, sq: Square) -> MoveList {
        if self.is_game_over() || self.board.color_of(sq) != Some(self.turn) {
            return MoveList::new();
        }
        legal_moves(&self.board, sq)
    }

    /// Tries to move the piece on `from` to `to`.
    ///
    /// Illegal requests never fail loudly: the board stays as it is and the
    /// selection is cleared.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.is_game_over() {
            debug!(%from, %to, "move after game over ignored");
            return MoveOutcome::Rejected;
        }
        self.phase = Phase::AwaitingSelection;

        let Some(mv) = self.legal_destinations_for(from).find(to) else {
            debug!(%from, %to, turn = %self.turn, "move rejected");
            return MoveOutcome::Rejected;
        };

        let mover = self.turn;
        self.board.move_piece(from, to);
        self.turn = mover.opposite();
        self.refresh_status();

        info!(
            %mover,
            mv = %mv.mov(),
            capture = mv.is_capture(),
            check = self.in_check,
            checkmate = self.checkmate,
            "move committed"
        );
        MoveOutcome::Committed(mv)
    }

    /// Like [`attempt_move`](Self::attempt_move), notifying `listener` when
    /// the turn changes hands.
    pub fn attempt_move_notify<L: TurnListener + ?Sized>(
        &mut self,
        from: Square,
        to: Square,
        listener: &mut L,
    ) -> MoveOutcome {
        let outcome = self.attempt_move(from, to);
        if outcome.is_committed() {
            listener.turn_changed(self.turn);
        }
        outcome
    }

    /// Human-readable status line.
    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::GameOver(Outcome::Checkmate { winner }) => {
                format!("Checkmate! {} wins.", winner)
            }
            Phase::GameOver(Outcome::Stalemate) => "Stalemate! Draw.".to_string(),
            _ if self.in_check => format!("{} is in check.", self.turn),
            _ => format!("{}'s turn.", self.turn),
        }
    }

    /// Restarts from the configured start position with White to move.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        *self = Self::with_config(config);
        info!("game reset");
    }

    /// Recomputes check, checkmate and the phase for the side to move.
    fn refresh_status(&mut self) {
        let side = self.turn;
        self.in_check = is_in_check(&self.board, side);
        let can_move = has_legal_move(&self.board, side);
        self.checkmate = self.in_check && !can_move;

        self.phase = if self.checkmate {
            let winner = side.opposite();
            info!(%winner, "checkmate");
            Phase::GameOver(Outcome::Checkmate { winner })
        } else if !can_move && self.config.stalemate == StalemateRule::Draw {
            info!(%side, "stalemate");
            Phase::GameOver(Outcome::Stalemate)
        } else {
            Phase::AwaitingSelection
        };
    }
}
