/// Game configuration constants.
///
/// This module defines the round parameters: how long a lone move may wait
/// for an opponent, and the status strings sent to the waiting player.
pub const PENDING_MOVE_TIMEOUT_SECS: u64 = 60; // Time a first move waits for an opponent.

/// Status sent to the first player while their move waits for an opponent.
pub const WAITING_MESSAGE: &str = "Waiting for player 2...";

/// Status sent to the first player when their move is withdrawn after the timeout.
pub const ABANDONED_MESSAGE: &str = "No opponent joined, your move was withdrawn.";
