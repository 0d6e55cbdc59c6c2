//! Match controller: the only way to change a match.
//!
//! `MatchController` owns a `MatchState`, dispatches moves to the evaluator
//! for the current round type, keeps score, enforces termination, and queues
//! commentary events for the caller.

mod controller;
mod snapshot;

pub use controller::{MatchController, RoundAdvance, WELCOME_CONTEXT};
pub use snapshot::MatchSnapshot;
