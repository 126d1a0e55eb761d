//! Authoritative game state and the move transition function.
//!
//! The state is owned by the match server actor; the engine itself is a
//! pure function from `(state, side, move)` to `(state, outcome)`, which
//! keeps the rules testable without any actor machinery.

use serde::{Deserialize, Serialize};

use crate::game::board::Board;
use crate::game::types::{Direction, Position, Side};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    #[serde(rename = "currentPlayer")]
    pub turn: Side,
}

/// Result of a move submission.
///
/// Rejection is silent at the protocol level (no broadcast, no reply); the
/// typed outcome exists so the caller can decide what to broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rejected,
    Applied,
    Win(Side),
}

impl GameState {
    /// Fresh game: canonical 10-piece layout, side A to move.
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            turn: Side::A,
        }
    }

    /// Validate and apply a single move.
    ///
    /// All checks run before any mutation; the input state is never touched.
    /// A rejected move returns a clone of the unchanged state. The caller is
    /// responsible for turn gating and, on `Win`, for resetting the state it
    /// owns.
    pub fn apply_move(
        &self,
        mover: Side,
        origin: Position,
        direction: Direction,
    ) -> (GameState, Outcome) {
        let rejected = (self.clone(), Outcome::Rejected);

        let Some(piece) = self.board.get(origin).copied() else {
            return rejected;
        };
        if piece.side != mover {
            return rejected;
        }
        if !piece.kind.supports(direction) {
            return rejected;
        }

        let unit = direction.unit_vector(mover);
        let range = piece.kind.range();
        let Some(destination) = origin.offset(unit, range) else {
            return rejected;
        };
        if self.board.get(destination).is_some_and(|p| p.side == mover) {
            return rejected;
        }

        let mut board = self.board.clone();

        // Jump-capture: a hero removes an opposing piece on the intermediate
        // cell. Empty or same-side intermediate cells are left untouched.
        if range == 2 {
            if let Some(intermediate) = origin.offset(unit, 1) {
                if board.get(intermediate).is_some_and(|p| p.side != mover) {
                    board.clear(intermediate);
                }
            }
        }

        board.clear(origin);
        board.set(destination, piece);

        let next = GameState {
            board,
            turn: mover.opponent(),
        };
        let outcome = if next.board.count_side(mover.opponent()) == 0 {
            Outcome::Win(mover)
        } else {
            Outcome::Applied
        };
        (next, outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
