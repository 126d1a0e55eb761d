pub mod board;
pub mod state;
pub mod tests;
pub mod types;
