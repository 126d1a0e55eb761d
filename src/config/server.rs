/// Server configuration constants.

/// Host the HTTP/WebSocket server binds to.
pub const BIND_HOST: &str = "127.0.0.1";

/// Port the HTTP/WebSocket server binds to.
pub const BIND_PORT: u16 = 8080;
