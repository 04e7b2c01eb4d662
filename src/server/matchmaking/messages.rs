use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::error::GameError;
use crate::game::types::{Choice, ConnectionId};

// Message client -> serveur
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ClientWsMessage {
    /// Raw move name; parsed into a `Choice` by the session so a bad value
    /// gets its own error code.
    Move(String),
}

// Message serveur -> client
#[derive(Message, Serialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerWsMessage {
    /// Round announcement or a status for the waiting player.
    #[serde(rename = "result")]
    RoundResult(String),
    Error {
        code: String,
        message: String,
    },
}

impl ServerWsMessage {
    pub fn result(text: &str) -> Self {
        Self::RoundResult(text.to_string())
    }
    pub fn error(err: &GameError) -> Self {
        Self::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Message: a connection opened and wants to receive broadcasts.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub id: ConnectionId,
    pub addr: Recipient<ServerWsMessage>,
}

/// Message: a connection closed.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub id: ConnectionId,
}

/// Message: a connection played a move.
#[derive(Message)]
#[rtype(result = "()")]
pub struct SubmitMove {
    pub id: ConnectionId,
    pub choice: Choice,
}
