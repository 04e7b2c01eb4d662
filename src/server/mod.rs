// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing and the landing page
//! - Matchmaking (move pairing, refereeing, result broadcast)

pub mod state;
pub mod router;
pub mod landing;
pub mod matchmaking;
