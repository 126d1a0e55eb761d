// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (seats, move relay, broadcasts)

pub mod game_session;
pub mod router;
pub mod state;
