//! Matchmaker actor.
//!
//! Owns the pending round and the registry of connected clients. Pairs the first two moves,
//! referees the round, and broadcasts the result to every connection. Being a single actor,
//! its mailbox serializes all moves, so each completed round is scored exactly once.

use actix::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use log::{info, debug};

use super::messages::{Connect, Disconnect, ServerWsMessage, SubmitMove};
use crate::config::game::{ABANDONED_MESSAGE, PENDING_MOVE_TIMEOUT_SECS, WAITING_MESSAGE};
use crate::game::types::{CompletedRound, ConnectionId};
use crate::game::{PendingRound, Submission};

type SessionAddr = Recipient<ServerWsMessage>;

/// Main matchmaking actor.
pub struct Matchmaker {
    /// Move slots of the round being played.
    round: PendingRound,
    /// Every open connection, all of which receive round results.
    connections: HashMap<ConnectionId, SessionAddr>,
    /// How long a lone move waits before it is withdrawn.
    pending_timeout: Duration,
    /// Timer armed while a move waits for an opponent.
    expiry: Option<SpawnHandle>,
}

impl Matchmaker {
    /// Create a matchmaker around an injected round.
    pub fn new(round: PendingRound, pending_timeout: Duration) -> Self {
        Self {
            round,
            connections: HashMap::new(),
            pending_timeout,
            expiry: None,
        }
    }

    /// Broadcast a message to every connected client.
    fn broadcast(&self, msg: ServerWsMessage) {
        for addr in self.connections.values() {
            addr.do_send(msg.clone());
        }
    }

    /// Send a message to a single connection, if it is still registered.
    fn send_to(&self, id: &ConnectionId, msg: ServerWsMessage) {
        match self.connections.get(id) {
            Some(addr) => addr.do_send(msg),
            None => debug!("[Matchmaker] Dropping message for unknown connection {}", id),
        }
    }

    fn announce(&self, completed: &CompletedRound) {
        info!(
            "[Matchmaker] Round complete: {} ({}) vs {} ({}) -> {:?}",
            completed.first.connection,
            completed.first.choice,
            completed.second.connection,
            completed.second.choice,
            completed.outcome,
        );
        self.broadcast(ServerWsMessage::result(completed.outcome.announcement()));
    }

    /// Arm the timer that withdraws the waiting move if nobody answers it.
    fn arm_expiry(&mut self, ctx: &mut Context<Self>, owner: ConnectionId) {
        self.disarm_expiry(ctx);
        let handle = ctx.run_later(self.pending_timeout, move |act, _ctx| {
            act.expiry = None;
            if act.round.retract(owner).is_some() {
                info!("[Matchmaker] Pending move of {} abandoned after {:?}", owner, act.pending_timeout);
                act.send_to(&owner, ServerWsMessage::result(ABANDONED_MESSAGE));
            }
        });
        self.expiry = Some(handle);
    }

    fn disarm_expiry(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.expiry.take() {
            ctx.cancel_future(handle);
        }
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new(PendingRound::new(), Duration::from_secs(PENDING_MOVE_TIMEOUT_SECS))
    }
}

impl Actor for Matchmaker {
    type Context = Context<Self>;
}

impl Handler<Connect> for Matchmaker {
    type Result = ();

    /// Handles a new connection.
    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        self.connections.insert(msg.id, msg.addr);
        info!("[Matchmaker] Connection {} opened ({} connected)", msg.id, self.connections.len());
    }
}

impl Handler<Disconnect> for Matchmaker {
    type Result = ();

    /// Handles a closed connection, withdrawing its move if it was waiting.
    fn handle(&mut self, msg: Disconnect, ctx: &mut Self::Context) -> Self::Result {
        self.connections.remove(&msg.id);
        if self.round.retract(msg.id).is_some() {
            self.disarm_expiry(ctx);
            debug!("[Matchmaker] Withdrew pending move of {}", msg.id);
        }
        info!("[Matchmaker] Connection {} closed ({} connected)", msg.id, self.connections.len());
    }
}

impl Handler<SubmitMove> for Matchmaker {
    type Result = ();

    /// Handles a move: first one waits, second one completes the round.
    fn handle(&mut self, msg: SubmitMove, ctx: &mut Self::Context) -> Self::Result {
        match self.round.submit(msg.id, msg.choice) {
            Submission::Waiting => {
                debug!("[Matchmaker] {} played first, waiting for an opponent", msg.id);
                self.arm_expiry(ctx, msg.id);
                self.send_to(&msg.id, ServerWsMessage::result(WAITING_MESSAGE));
            }
            Submission::Completed(completed) => {
                self.disarm_expiry(ctx);
                debug_assert!(self.round.is_empty());
                self.announce(&completed);
            }
        }
    }
}
