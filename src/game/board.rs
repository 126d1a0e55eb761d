//! Board model.
//!
//! A fixed 5x5 grid of cells, each holding at most one piece. Serialized on
//! the wire as rows of piece tokens (`"A-P1"`) or `null` for empty cells.

use serde::{Deserialize, Serialize};

use crate::config::game::{BOARD_COLS, BOARD_ROWS};
use crate::game::types::{Piece, PieceKind, Position, Side};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_COLS]; BOARD_ROWS],
}

impl Board {
    /// Canonical starting layout: each side's five pieces on its home row
    /// (row 0 for A, the last row for B), mirrored under row reflection.
    pub fn starting() -> Self {
        let mut board = Board {
            cells: [[None; BOARD_COLS]; BOARD_ROWS],
        };
        board.cells[0] = Self::home_row(Side::A);
        board.cells[BOARD_ROWS - 1] = Self::home_row(Side::B);
        board
    }

    fn home_row(side: Side) -> [Option<Piece>; BOARD_COLS] {
        let pawn = |instance| {
            Some(Piece {
                side,
                kind: PieceKind::Pawn,
                instance,
            })
        };
        let hero = |kind| {
            Some(Piece {
                side,
                kind,
                instance: 1,
            })
        };
        [
            pawn(1),
            pawn(2),
            hero(PieceKind::Hero1),
            hero(PieceKind::Hero2),
            pawn(3),
        ]
    }

    /// Piece at the cell, or `None` for an empty or out-of-grid position.
    /// Client-supplied coordinates flow through here unchecked.
    pub fn get(&self, pos: Position) -> Option<&Piece> {
        self.cells.get(pos.row)?.get(pos.col)?.as_ref()
    }

    pub fn set(&mut self, pos: Position, piece: Piece) {
        self.cells[pos.row][pos.col] = Some(piece);
    }

    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = None;
    }

    /// Number of pieces the given side still has on the board.
    pub fn count_side(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.map(|p| p.side) == Some(side))
            .count()
    }
}
