/// WebSocket session handler for one participant.
///
/// This actor manages a single connection: it registers with the match
/// server on start, relays parsed move requests tagged with its own
/// address, and serializes server frames back to the client. It holds no
/// game state of its own; the match server resolves which side the
/// connection is bound to.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::warn;

use super::messages::{
    ClientWsMessage, Connect, Disconnect, ProcessMove, SeatRefused, ServerWsMessage,
};
use super::server::MatchServer;

pub struct PlayerSession {
    pub match_addr: Addr<MatchServer>,
}

impl Actor for PlayerSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Requests a seat from the match server.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.match_addr.do_send(Connect {
            addr: ctx.address(),
        });
    }

    /// Called when the session stops. Frees the seat, if still held.
    fn stopped(&mut self, ctx: &mut Self::Context) {
        self.match_addr.do_send(Disconnect {
            addr: ctx.address(),
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(ClientWsMessage::Move { request }) => {
                        self.match_addr.do_send(ProcessMove {
                            request,
                            addr: ctx.address(),
                        });
                    }
                    Err(e) => {
                        // Malformed frames are dropped without a reply; the
                        // shared state is never touched by them.
                        warn!("[PlayerSession] Unparseable client frame: {}", e);
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for PlayerSession {
    type Result = ();

    /// Relays a server frame to the client as JSON text.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[PlayerSession] Failed to serialize server frame: {}", e);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

impl Handler<SeatRefused> for PlayerSession {
    type Result = ();

    /// Both seats are taken: close the socket instead of aliasing the
    /// connection onto an occupied side.
    fn handle(&mut self, _: SeatRefused, ctx: &mut Self::Context) {
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Match is full".into()),
        }));
        ctx.stop();
    }
}

/// WebSocket endpoint for joining the match.
pub async fn ws_play(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(
        PlayerSession {
            match_addr: data.match_addr.clone(),
        },
        &req,
        stream,
    )
}
