// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the match server actor. Used to share state between
//! HTTP/WebSocket handlers and the actor system.

use actix::Addr;

use crate::server::game_session::server::MatchServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the match server actor (owns game state and seats).
    pub match_addr: Addr<MatchServer>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(match_addr: Addr<MatchServer>) -> Self {
        AppState { match_addr }
    }
}
