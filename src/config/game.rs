/// Game configuration constants.
///
/// This module defines the board dimensions. The rules engine assumes a
/// square grid with one home row per side.

/// Number of rows in the game board.
pub const BOARD_ROWS: usize = 5;

/// Number of columns in the game board.
pub const BOARD_COLS: usize = 5;
