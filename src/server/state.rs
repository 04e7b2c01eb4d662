// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the matchmaker's address so WebSocket handlers can hand new sessions to it.

use actix::Addr;
use crate::server::matchmaking::server::Matchmaker;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the matchmaker actor (owns the pending round and the connection registry).
    pub matchmaker: Addr<Matchmaker>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(matchmaker: Addr<Matchmaker>) -> Self {
        AppState { matchmaker }
    }
}
