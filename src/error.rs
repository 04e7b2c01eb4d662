//! Errors reported back to a single WebSocket connection.
//!
//! Every variant carries a stable machine-readable code; the code and the
//! display text are what the client sees in an `error` event.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("'{0}' is not a valid move, expected rock, paper or scissors")]
    InvalidChoice(String),
    #[error("Invalid client message: {0}")]
    InvalidMessage(String),
}

impl GameError {
    /// Unique error code sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidChoice(_) => "INVALID_CHOICE",
            GameError::InvalidMessage(_) => "INVALID_MESSAGE",
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::InvalidMessage(err.to_string())
    }
}
