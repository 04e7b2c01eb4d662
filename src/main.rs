//! Main entry point for the backend server.
//!
//! Initializes the logger and the matchmaker actor, then launches the HTTP server
//! serving the landing page and the player WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;
use server::matchmaking::server::Matchmaker;

use crate::config::server::{ALLOWED_ORIGIN, BIND_HOST, PORT};

pub mod config;
mod error;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start the Matchmaker actor (owns the pending round and every connection).
    let matchmaker = Matchmaker::default().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(matchmaker));

    info!("[Server] Listening on http://{}:{}", BIND_HOST, PORT);

    // Start the HTTP server with the landing page and WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", ALLOWED_ORIGIN))
                    .add(("Access-Control-Allow-Methods", "GET, POST"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, PORT))?
    .run()
    .await
}
