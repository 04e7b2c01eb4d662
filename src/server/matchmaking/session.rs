/// WebSocket session handler for a player.
///
/// This actor manages a single client connection: it registers with the matchmaker,
/// decodes `move` events into choices, and serializes server messages back to the client.
/// Malformed frames are answered with an error event and never reach the matchmaker.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, error, warn};
use uuid::Uuid;

use super::messages::{ClientWsMessage, Connect, Disconnect, ServerWsMessage, SubmitMove};
use super::server::Matchmaker;
use crate::error::GameError;
use crate::game::types::{Choice, ConnectionId};

/// Represents one client's WebSocket connection.
pub struct PlayerSession {
    pub id: ConnectionId,
    pub matchmaker: Addr<Matchmaker>,
}

impl PlayerSession {
    pub fn new(matchmaker: Addr<Matchmaker>) -> Self {
        Self {
            id: Uuid::new_v4(),
            matchmaker,
        }
    }

    /// Decode a text frame into the move it carries.
    fn parse_move(text: &str) -> Result<Choice, GameError> {
        match serde_json::from_str::<ClientWsMessage>(text)? {
            ClientWsMessage::Move(raw) => raw.parse(),
        }
    }

    fn send_error(&self, ctx: &mut ws::WebsocketContext<Self>, err: &GameError) {
        warn!("[Session] {} sent a bad frame: {}", self.id, err);
        Self::send_message(ctx, &ServerWsMessage::error(err));
    }

    /// Serialize a server message onto the socket; closes the socket if that fails.
    fn send_message(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerWsMessage) {
        match serde_json::to_string(msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[Session] Failed to serialize ServerWsMessage: {}", e);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

impl Actor for PlayerSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Registers the connection with the matchmaker.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.matchmaker.do_send(Connect {
            id: self.id,
            addr: ctx.address().recipient(),
        });
    }

    /// Called when the session stops. Unregisters the connection.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.matchmaker.do_send(Disconnect { id: self.id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSession {
    /// Handles incoming WebSocket messages from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match Self::parse_move(&text) {
                Ok(choice) => {
                    debug!("[Session] {} played {}", self.id, choice);
                    self.matchmaker.do_send(SubmitMove { id: self.id, choice });
                }
                Err(err) => self.send_error(ctx, &err),
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[Session] Protocol error on {}: {}", self.id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for PlayerSession {
    type Result = ();

    /// Handles messages sent from the matchmaker to this session.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        Self::send_message(ctx, &msg);
    }
}

/// WebSocket endpoint for players. No query parameters; every socket gets a fresh id.
pub async fn ws_play(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(PlayerSession::new(data.matchmaker.clone()), &req, stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_accepts_known_choices() {
        let choice = PlayerSession::parse_move(r#"{"event":"move","data":"Scissors"}"#).unwrap();
        assert_eq!(choice, Choice::Scissors);
    }

    #[test]
    fn test_parse_move_rejects_unknown_choice() {
        let err = PlayerSession::parse_move(r#"{"event":"move","data":"lizard"}"#).unwrap_err();
        assert_eq!(err.code(), "INVALID_CHOICE");
    }

    #[test]
    fn test_parse_move_rejects_malformed_frame() {
        let err = PlayerSession::parse_move("not json").unwrap_err();
        assert_eq!(err.code(), "INVALID_MESSAGE");
    }

    mod over_the_wire {
        use std::time::Duration;

        use actix::Actor;
        use actix_web::{web, App};
        use awc::ws as client_ws;
        use futures_util::{SinkExt as _, Stream, StreamExt as _};
        use serde_json::{json, Value};

        use crate::config::game::WAITING_MESSAGE;
        use crate::server::matchmaking::server::Matchmaker;
        use crate::server::router;
        use crate::server::state::AppState;

        fn start_server() -> actix_test::TestServer {
            let state = web::Data::new(AppState::new(Matchmaker::default().start()));
            actix_test::start(move || App::new().app_data(state.clone()).configure(router::config))
        }

        async fn next_event<S>(conn: &mut S) -> Value
        where
            S: Stream<Item = Result<client_ws::Frame, awc::error::WsProtocolError>> + Unpin,
        {
            match conn.next().await {
                Some(Ok(client_ws::Frame::Text(bytes))) => serde_json::from_slice(&bytes).unwrap(),
                other => panic!("expected a text frame, got {:?}", other),
            }
        }

        fn move_frame(choice: &str) -> client_ws::Message {
            client_ws::Message::Text(json!({"event": "move", "data": choice}).to_string().into())
        }

        fn result(text: &str) -> Value {
            json!({"event": "result", "data": text})
        }

        #[actix_web::test]
        async fn test_round_is_played_and_broadcast_over_websockets() {
            let mut srv = start_server();
            let mut alice = srv.ws_at("/ws").await.unwrap();
            let mut bob = srv.ws_at("/ws").await.unwrap();

            alice.send(move_frame("rock")).await.unwrap();
            assert_eq!(next_event(&mut alice).await, result(WAITING_MESSAGE));

            bob.send(move_frame("scissors")).await.unwrap();
            assert_eq!(next_event(&mut alice).await, result("You Win!"));
            assert_eq!(next_event(&mut bob).await, result("You Win!"));
        }

        #[actix_web::test]
        async fn test_invalid_choice_is_answered_with_error_event() {
            let mut srv = start_server();
            let mut alice = srv.ws_at("/ws").await.unwrap();

            alice.send(move_frame("lizard")).await.unwrap();
            let event = next_event(&mut alice).await;
            assert_eq!(event["event"], "error");
            assert_eq!(event["data"]["code"], "INVALID_CHOICE");

            // The round was left empty, so the next move is a first move.
            alice.send(move_frame("paper")).await.unwrap();
            assert_eq!(next_event(&mut alice).await, result(WAITING_MESSAGE));
        }

        #[actix_web::test]
        async fn test_closing_waiting_socket_empties_round() {
            let mut srv = start_server();
            let mut alice = srv.ws_at("/ws").await.unwrap();
            let mut bob = srv.ws_at("/ws").await.unwrap();

            alice.send(move_frame("rock")).await.unwrap();
            assert_eq!(next_event(&mut alice).await, result(WAITING_MESSAGE));

            alice.send(client_ws::Message::Close(None)).await.unwrap();
            assert!(matches!(alice.next().await, Some(Ok(client_ws::Frame::Close(_)))));
            // Let the session stop and unregister.
            tokio::time::sleep(Duration::from_millis(200)).await;

            bob.send(move_frame("scissors")).await.unwrap();
            assert_eq!(next_event(&mut bob).await, result(WAITING_MESSAGE));
        }
    }
}
