use crate::game::rules::determine_winner;
use crate::game::types::{Choice, CompletedRound, ConnectionId, Seat};

/// The round currently being played.
///
/// Only slot A is stored: the move that would fill slot B completes the
/// round, is scored, and resets the round in the same call, so a full round
/// is never observable.
#[derive(Debug, Default)]
pub struct PendingRound {
    slot_a: Option<Seat>,
}

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The move took the first slot and waits for an opponent.
    Waiting,
    Completed(CompletedRound),
}

impl PendingRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_a.is_none()
    }

    /// Connection whose move is waiting for an opponent, if any.
    pub fn waiting_connection(&self) -> Option<ConnectionId> {
        self.slot_a.map(|seat| seat.connection)
    }

    /// First move waits; any second move, whoever sends it, completes the round.
    pub fn submit(&mut self, connection: ConnectionId, choice: Choice) -> Submission {
        let seat = Seat { connection, choice };
        match self.slot_a.take() {
            None => {
                self.slot_a = Some(seat);
                Submission::Waiting
            }
            Some(first) => Submission::Completed(CompletedRound {
                first,
                second: seat,
                outcome: determine_winner(first.choice, seat.choice),
            }),
        }
    }

    /// Clears the waiting slot if `connection` owns it.
    pub fn retract(&mut self, connection: ConnectionId) -> Option<Seat> {
        match self.slot_a {
            Some(seat) if seat.connection == connection => self.slot_a.take(),
            _ => None,
        }
    }
}
