//! HTTP and WebSocket routing configuration.
//!
//! Defines the landing page and the single WebSocket endpoint players connect to.

use actix_web::web;
use crate::server::landing::index;
use crate::server::matchmaking::session::ws_play;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
    )
    .service(
        web::resource("/ws")
            .to(ws_play)
    );
}
