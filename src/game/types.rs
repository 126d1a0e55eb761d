use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::game::{BOARD_COLS, BOARD_ROWS};

/// One of the two competing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Sign of the "forward" row direction for this side.
    ///
    /// Side A's home row is row 0, so forward is row-increasing; side B's
    /// home row is the last row, so forward is row-decreasing.
    pub fn forward_sign(self) -> isize {
        match self {
            Side::A => 1,
            Side::B => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Piece kinds and their movement profiles.
///
/// Pawn moves one cell orthogonally. Hero1 moves two cells orthogonally,
/// Hero2 two cells diagonally; both heroes jump-capture an opposing piece
/// on the intermediate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Hero1,
    Hero2,
}

impl PieceKind {
    /// Number of cells this kind travels per move.
    pub fn range(self) -> isize {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Hero1 | PieceKind::Hero2 => 2,
        }
    }

    /// Whether this kind may move in the given direction.
    pub fn supports(self, direction: Direction) -> bool {
        match self {
            PieceKind::Pawn | PieceKind::Hero1 => !direction.is_diagonal(),
            PieceKind::Hero2 => direction.is_diagonal(),
        }
    }
}

/// A single piece on the board.
///
/// Serialized on the wire as a token `{side}-{kindInstance}`, e.g. `A-P2`
/// for side A's second pawn or `B-H1` for side B's orthogonal hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    pub instance: u8,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PieceKind::Pawn => write!(f, "{}-P{}", self.side, self.instance),
            PieceKind::Hero1 => write!(f, "{}-H1", self.side),
            PieceKind::Hero2 => write!(f, "{}-H2", self.side),
        }
    }
}

impl FromStr for Piece {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, tag) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid piece token: {s}"))?;
        let side = match side {
            "A" => Side::A,
            "B" => Side::B,
            _ => return Err(format!("invalid piece side: {s}")),
        };
        let (kind, instance) = match tag {
            "H1" => (PieceKind::Hero1, 1),
            "H2" => (PieceKind::Hero2, 1),
            _ => {
                let instance = tag
                    .strip_prefix('P')
                    .and_then(|digits| digits.parse::<u8>().ok())
                    .ok_or_else(|| format!("invalid piece kind: {s}"))?;
                (PieceKind::Pawn, instance)
            }
        };
        Ok(Piece {
            side,
            kind,
            instance,
        })
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(D::Error::custom)
    }
}

/// Movement direction, relative to the mover's side for the row component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Forward,
    #[serde(rename = "B")]
    Back,
    #[serde(rename = "FL")]
    ForwardLeft,
    #[serde(rename = "FR")]
    ForwardRight,
    #[serde(rename = "BL")]
    BackLeft,
    #[serde(rename = "BR")]
    BackRight,
}

impl Direction {
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::ForwardLeft
                | Direction::ForwardRight
                | Direction::BackLeft
                | Direction::BackRight
        )
    }

    /// Unit step vector `(row_delta, col_delta)` for the given mover.
    ///
    /// Forward/backward depend on the mover's side; left/right columns are
    /// absolute board coordinates.
    pub fn unit_vector(self, side: Side) -> (isize, isize) {
        let f = side.forward_sign();
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (f, 0),
            Direction::Back => (-f, 0),
            Direction::ForwardLeft => (f, -1),
            Direction::ForwardRight => (f, 1),
            Direction::BackLeft => (-f, -1),
            Direction::BackRight => (-f, 1),
        }
    }
}

/// Zero-based cell coordinates on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Cell reached by stepping `steps` times along the unit vector, or
    /// `None` when the result falls outside the board.
    pub fn offset(self, (row_delta, col_delta): (isize, isize), steps: isize) -> Option<Position> {
        let row = self.row as isize + row_delta * steps;
        let col = self.col as isize + col_delta * steps;
        if (0..BOARD_ROWS as isize).contains(&row) && (0..BOARD_COLS as isize).contains(&col) {
            Some(Position {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}
