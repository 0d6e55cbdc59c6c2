//! # outsmart
//!
//! Round engine for a three-round-type mind game played against a scripted
//! opponent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through an injected
//!    `RandomSource`. A seed and a move list reproduce a match exactly.
//!
//! 2. **Closed vocabularies**: Round types, outcomes, and commentary
//!    triggers are enums, so dispatch is exhaustive.
//!
//! 3. **Commentary is a side channel**: The engine emits events after each
//!    state change and never waits on, or reads, commentary text.
//!
//! ## Modules
//!
//! - `core`: Choices, match state, configuration, errors, RNG
//! - `rounds`: Pattern Trap, Authority Challenge, and Instinct Round evaluators
//! - `events`: Commentary triggers and the outbound event queue
//! - `commentary`: Commentator trait, fallback text, prompt rendering
//! - `engine`: `MatchController` and snapshots

pub mod core;
pub mod rounds;
pub mod events;
pub mod commentary;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Element, Move, Outcome, Pick, RoundType, Stance, Winner,
    MatchConfig, MatchState, RoundResult,
    EngineError, MoveRejection, StateRejection, StateCorruption, ConfigError,
    GameRng, GameRngState, RandomSource, ScriptedRng,
};

pub use crate::rounds::{
    RoundEvaluator, EvalContext, PatternTrap, AuthorityChallenge, InstinctRound,
};

pub use crate::events::{CommentaryEvent, CommentaryTrigger, EventQueue};

pub use crate::commentary::{
    Commentator, CommentaryError, CommentaryPrompt, CannedCommentator,
    commentary_or_fallback,
};

pub use crate::engine::{MatchController, MatchSnapshot, RoundAdvance};
