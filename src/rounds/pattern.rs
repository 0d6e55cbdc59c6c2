//! Pattern Trap: pick 1, 2 or 3 and don't be predictable.

use super::{EvalContext, RoundEvaluator};
use crate::core::{pick_number, Pick, RandomSource, RoundResult, RoundType};

pub const REPEAT_REASON: &str = "I knew you'd get stuck in a loop! Repetition is predictable.";
pub const GUESSED_REASON: &str = "Pure prediction. I'm in your head, dost!";
pub const BROKEN_REASON: &str = "Nice move. You broke the pattern.";

/// Pattern Trap evaluator.
///
/// The opponent assumes you will repeat your last Pattern Trap pick. If you
/// do, it wins without drawing. Otherwise it guesses uniformly and wins only
/// on an exact match.
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternTrap;

impl PatternTrap {
    /// The pick the opponent locks in without guessing, if any.
    #[must_use]
    pub fn predict(history: &[u8]) -> Option<Pick> {
        history.last().copied().and_then(Pick::new)
    }
}

impl RoundEvaluator for PatternTrap {
    type Choice = Pick;

    fn round_type(&self) -> RoundType {
        RoundType::Pattern
    }

    fn evaluate(
        &self,
        choice: Pick,
        ctx: &EvalContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> RoundResult {
        if Self::predict(ctx.history) == Some(choice) {
            return RoundResult::ai_win(REPEAT_REASON);
        }

        let guess = pick_number(rng);
        if guess == choice {
            RoundResult::ai_win(GUESSED_REASON)
        } else {
            RoundResult::human_win(BROKEN_REASON)
        }
    }
}
