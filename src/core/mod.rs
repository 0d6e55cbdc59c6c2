//! Core engine types: choices, state, configuration, errors, RNG.
//!
//! Everything here is free of evaluation rules. The mini-games live in
//! `rounds` and the state machine that drives them lives in `engine`.

pub mod choice;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use choice::{Element, Move, Outcome, Pick, RoundType, Stance, Winner};
pub use config::MatchConfig;
pub use error::{ConfigError, EngineError, MoveRejection, StateCorruption, StateRejection};
pub use rng::{
    pick_element, pick_number, pick_round_type, GameRng, GameRngState, RandomSource, ScriptedRng,
};
pub use state::{MatchState, RoundResult};
