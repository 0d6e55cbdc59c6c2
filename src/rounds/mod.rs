//! Mini-game evaluators.
//!
//! Each round type has one evaluator implementing `RoundEvaluator`:
//! - `PatternTrap`: punishes repeating your previous pick
//! - `AuthorityChallenge`: the opponent's advice is always the losing move
//! - `InstinctRound`: Fire / Grass / Water cyclic dominance
//!
//! Evaluators are pure over their inputs. They read the move history through
//! `EvalContext` but never write it; recording moves is the controller's job.

pub mod authority;
pub mod instinct;
pub mod pattern;

pub use authority::AuthorityChallenge;
pub use instinct::InstinctRound;
pub use pattern::PatternTrap;

use crate::core::{RandomSource, RoundResult, RoundType};

/// Read-only match data an evaluator may consult.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalContext<'a> {
    /// Pattern Trap history as it stood before the move being evaluated.
    pub history: &'a [u8],
}

impl<'a> EvalContext<'a> {
    #[must_use]
    pub fn new(history: &'a [u8]) -> Self {
        Self { history }
    }

    /// Most recent Pattern Trap pick, if any.
    #[must_use]
    pub fn last_pick(&self) -> Option<u8> {
        self.history.last().copied()
    }
}

/// Common protocol for the three mini-games.
///
/// ## Implementation Notes
///
/// - `evaluate` returns an outcome and a reason, nothing else
/// - Only `InstinctRound` may return `Outcome::Draw`
/// - All randomness comes from the `rng` argument
pub trait RoundEvaluator {
    /// The typed input this mini-game accepts.
    type Choice: Copy;

    /// Which round type this evaluator handles.
    fn round_type(&self) -> RoundType;

    /// Score one move.
    fn evaluate(
        &self,
        choice: Self::Choice,
        ctx: &EvalContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> RoundResult;
}
