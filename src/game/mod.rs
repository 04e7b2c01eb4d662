pub mod types;
pub mod rules;
pub mod state;

pub use state::{PendingRound, Submission};
