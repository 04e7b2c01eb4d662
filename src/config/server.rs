/// Server configuration constants.
///
/// This module defines where the combined HTTP/WebSocket endpoint listens
/// and which browser origin may talk to it.
pub const BIND_HOST: &str = "127.0.0.1";

/// Single fixed TCP port for the landing page and the WebSocket endpoint.
pub const PORT: u16 = 3000;

/// Origin allowed by the CORS headers (the dev server hosting the client page).
pub const ALLOWED_ORIGIN: &str = "http://localhost:8080";
