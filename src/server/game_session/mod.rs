//! Game session orchestration.
//!
//! One persistent match: a central [`server::MatchServer`] actor owning the
//! game state and seat registry, plus one [`session::PlayerSession`]
//! WebSocket actor per connection.

pub mod messages;
pub mod registry;
pub mod server;
pub mod session;
