use actix::prelude::*;
use serde::{Deserialize, Serialize};

use super::session::PlayerSession;
use crate::game::state::GameState;
use crate::game::types::{Direction, Side};

/// Client -> server frames.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientWsMessage {
    Move {
        #[serde(rename = "move")]
        request: MoveRequest,
    },
}

/// Request to move the piece standing on the given cell.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub row_index: usize,
    pub col_index: usize,
    pub direction: Direction,
}

/// Server -> client frames.
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerWsMessage {
    /// Sent once when a seat is assigned.
    Init {
        state: GameState,
        #[serde(rename = "playerId")]
        player_id: Side,
    },
    /// Sent after every applied move.
    Update { state: GameState },
    /// Sent once when a side is eliminated, between the `Update` carrying
    /// the final position and the `Update` carrying the reset board.
    GameOver { winner: Side },
}

/// A session registers itself for a seat.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub addr: Addr<PlayerSession>,
}

/// A session went away; its seat (if still bound) is freed.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub addr: Addr<PlayerSession>,
}

/// Inbound move request, tagged with the sending session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessMove {
    pub request: MoveRequest,
    pub addr: Addr<PlayerSession>,
}

/// Told to a session when both seats are already taken.
#[derive(Message)]
#[rtype(result = "()")]
pub struct SeatRefused;
