/// Matchmaking module: pairs moves, referees rounds, and relays results to every connection.

pub mod server;
pub mod session;
pub mod messages;
