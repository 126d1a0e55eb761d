//! Match server actor.
//!
//! Owns the authoritative [`GameState`] and the two seats. Every connect,
//! move request and disconnect passes through this actor's mailbox, so
//! handling is strictly serialized and the state needs no lock. Broadcasts
//! are fanned out synchronously inside the handler that produced the state
//! change, which keeps them ordered identically for both participants.

use actix::prelude::*;
use log::{debug, info, warn};

use crate::game::state::{GameState, Outcome};
use crate::game::types::{Position, Side};
use crate::server::game_session::messages::{
    Connect, Disconnect, MoveRequest, ProcessMove, SeatRefused, ServerWsMessage,
};
use crate::server::game_session::registry::SeatRegistry;
use crate::server::game_session::session::PlayerSession;

pub struct MatchServer {
    seats: SeatRegistry<Addr<PlayerSession>>,
    game_state: GameState,
}

/// Gate a move submission and decide what to broadcast.
///
/// Returns the state to keep and the frames to fan out, in order. Unseated
/// or out-of-turn senders and rejected moves yield no frames and leave the
/// state untouched. An applied move yields one `update`. A winning move
/// yields the `update` with the final position, `game-over`, then the
/// `update` carrying the reset board.
pub fn resolve_submission(
    state: &GameState,
    sender: Option<Side>,
    request: MoveRequest,
) -> (GameState, Vec<ServerWsMessage>) {
    let Some(side) = sender else {
        debug!("[MatchServer] Move from unseated session dropped");
        return (state.clone(), Vec::new());
    };
    // Out-of-turn submissions are dropped with no reply.
    if side != state.turn {
        debug!("[MatchServer] Out-of-turn move from {} dropped", side);
        return (state.clone(), Vec::new());
    }

    let origin = Position {
        row: request.row_index,
        col: request.col_index,
    };
    let (next, outcome) = state.apply_move(side, origin, request.direction);

    match outcome {
        Outcome::Rejected => {
            // Silent-rejection contract: state untouched, no broadcast.
            debug!(
                "[MatchServer] Illegal move from {} at ({},{}) rejected",
                side, origin.row, origin.col
            );
            (next, Vec::new())
        }
        Outcome::Applied => {
            debug!("[MatchServer] Move applied, turn passes to {}", next.turn);
            let update = ServerWsMessage::Update {
                state: next.clone(),
            };
            (next, vec![update])
        }
        Outcome::Win(winner) => {
            info!("[MatchServer] Side {} wins, resetting board", winner);
            let fresh = GameState::new();
            let frames = vec![
                ServerWsMessage::Update { state: next },
                ServerWsMessage::GameOver { winner },
                ServerWsMessage::Update {
                    state: fresh.clone(),
                },
            ];
            (fresh, frames)
        }
    }
}

impl MatchServer {
    pub fn new() -> Self {
        MatchServer {
            seats: SeatRegistry::new(),
            game_state: GameState::new(),
        }
    }

    fn broadcast(&self, msg: ServerWsMessage) {
        for addr in self.seats.occupied() {
            addr.do_send(msg.clone());
        }
    }
}

impl Default for MatchServer {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for MatchServer {
    type Context = Context<Self>;
}

impl Handler<Connect> for MatchServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        match self.seats.assign(msg.addr.clone()) {
            Some(side) => {
                info!("[MatchServer] Seat {} assigned", side);
                msg.addr.do_send(ServerWsMessage::Init {
                    state: self.game_state.clone(),
                    player_id: side,
                });
            }
            None => {
                warn!("[MatchServer] Connection refused: both seats taken");
                msg.addr.do_send(SeatRefused);
            }
        }
    }
}

impl Handler<Disconnect> for MatchServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        // The game itself is not paused or reset by a disconnect; the freed
        // seat can be reclaimed by the next connection.
        match self.seats.release(&msg.addr) {
            Some(side) => info!("[MatchServer] Seat {} released", side),
            None => debug!("[MatchServer] Disconnect from unseated session ignored"),
        }
    }
}

impl Handler<ProcessMove> for MatchServer {
    type Result = ();

    fn handle(&mut self, msg: ProcessMove, _: &mut Context<Self>) -> Self::Result {
        let sender = self.seats.side_of(&msg.addr);
        let (next_state, frames) = resolve_submission(&self.game_state, sender, msg.request);
        self.game_state = next_state;
        for frame in frames {
            self.broadcast(frame);
        }
    }
}
