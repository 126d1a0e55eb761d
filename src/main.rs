//! Main entry point for the backend server.
//!
//! Initializes the actor system, configures application state, and launches
//! the HTTP server with the WebSocket endpoint for the match.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use config::server::{BIND_HOST, BIND_PORT};
use server::game_session::server::MatchServer;

pub mod config;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Start the MatchServer actor (owns the game state and both seats).
    let match_addr = MatchServer::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(match_addr));

    info!("Starting server on {}:{}", BIND_HOST, BIND_PORT);

    // Start the HTTP server with the WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
