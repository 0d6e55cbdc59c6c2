//! Engine error types.
//!
//! Move and state rejections are caller contract violations. They are
//! returned before any state is touched, so a failed call leaves the match
//! exactly as it was.

use thiserror::Error;

use super::choice::{Move, RoundType, Winner};

/// Why a submitted move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("match is over")]
    MatchOver,
    #[error("a move was already submitted this round")]
    AlreadySubmitted,
    #[error("{round} expects a {expected}, got {got}")]
    WrongKind {
        round: RoundType,
        expected: &'static str,
        got: Move,
    },
    #[error("pick {0} is outside 1..=3")]
    OutOfRange(u8),
}

/// Why advancing the round was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateRejection {
    #[error("match is over")]
    MatchOver,
    #[error("no move has been submitted this round")]
    NoPendingResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateRejection),
    #[error("snapshot error: {0}")]
    Snapshot(String),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, EngineError::InvalidMove(_))
    }

    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, EngineError::InvalidState(_))
    }
}

/// Rejected match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("target score must be at least 1")]
    ZeroTargetScore,
    #[error("max rounds must be at least 1")]
    ZeroMaxRounds,
}

/// A match state that no sequence of engine calls could have produced.
///
/// Raised when restoring a snapshot whose state was edited or belongs to
/// different rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateCorruption {
    #[error("round number must start at 1")]
    ZeroRound,
    #[error("round {round} is past the round limit of {max_rounds}")]
    RoundPastLimit { round: u32, max_rounds: u32 },
    #[error("score {score} is above the target of {target}")]
    ScoreAboveTarget { score: u32, target: u32 },
    #[error("{points} points awarded in {rounds} rounds")]
    TooManyPoints { points: u32, rounds: u32 },
    #[error("pattern history holds {0}, outside 1..=3")]
    HistoryOutOfRange(u8),
    #[error("pattern history has {picks} picks after {rounds} rounds")]
    HistoryTooLong { picks: usize, rounds: u32 },
    #[error("winner must be recorded exactly when the match is over")]
    WinnerMismatch,
    #[error("recorded winner {recorded} disagrees with the score")]
    WrongWinner { recorded: Winner },
    #[error("finished match has no final result")]
    MissingFinalResult,
}
