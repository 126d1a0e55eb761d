//! HTTP and WebSocket routing configuration.
//!
//! Defines the single endpoint for joining the match. The endpoint is
//! handled by a dedicated WebSocket actor.

use actix_web::web;

use crate::server::game_session::session::ws_play;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws/play").to(ws_play));
}
