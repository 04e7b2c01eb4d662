use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::GameError;

/// Opaque id handed to every WebSocket connection.
pub type ConnectionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = GameError;

    /// Accepts the three names in any case, surrounding whitespace ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Choice::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| GameError::InvalidChoice(raw.to_string()))
    }
}

/// Result of a round, seen from the first player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    Win,
    Lose,
}

impl Outcome {
    /// Text broadcast to every connection once a round completes.
    pub fn announcement(self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "You Win!",
            Outcome::Lose => "You Lose!",
        }
    }
}

/// A filled slot of the pending round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub connection: ConnectionId,
    pub choice: Choice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedRound {
    pub first: Seat,
    pub second: Seat,
    pub outcome: Outcome,
}
