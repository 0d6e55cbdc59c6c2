//! Authority Challenge: the opponent tells you what to do. Don't listen.

use super::{EvalContext, RoundEvaluator};
use crate::core::{RandomSource, RoundResult, RoundType, Stance};

/// What the opponent tells the player before they choose.
pub const ADVICE: &str = "Trust me, bhai. OBEY is the safe option this time.";
pub const TRICKED_REASON: &str = "Never trust a bot, beta. I tricked you!";
pub const SAW_THROUGH_REASON: &str = "Smart! You saw through my bluff.";

/// Authority Challenge evaluator.
///
/// A fixed bluff: the advice is always `Obey` and `Obey` always loses.
/// No randomness is involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorityChallenge;

impl AuthorityChallenge {
    /// The stance the opponent recommends.
    #[must_use]
    pub const fn advice() -> Stance {
        Stance::Obey
    }

    /// Evaluate without an RNG or context.
    #[must_use]
    pub fn judge(choice: Stance) -> RoundResult {
        match choice {
            Stance::Obey => RoundResult::ai_win(TRICKED_REASON),
            Stance::Defy => RoundResult::human_win(SAW_THROUGH_REASON),
        }
    }
}

impl RoundEvaluator for AuthorityChallenge {
    type Choice = Stance;

    fn round_type(&self) -> RoundType {
        RoundType::Authority
    }

    fn evaluate(
        &self,
        choice: Stance,
        _ctx: &EvalContext<'_>,
        _rng: &mut dyn RandomSource,
    ) -> RoundResult {
        Self::judge(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, ScriptedRng};

    #[test]
    fn test_obey_loses() {
        let mut rng = ScriptedRng::new([]);
        let result = AuthorityChallenge.evaluate(Stance::Obey, &EvalContext::default(), &mut rng);
        assert_eq!(result.outcome, Outcome::AiWin);
        assert_eq!(result.reason, TRICKED_REASON);
    }

    #[test]
    fn test_defy_wins() {
        let result = AuthorityChallenge::judge(Stance::Defy);
        assert_eq!(result.outcome, Outcome::HumanWin);
        assert_eq!(result.reason, SAW_THROUGH_REASON);
    }

    #[test]
    fn test_advice_is_the_losing_move() {
        assert_eq!(
            AuthorityChallenge::judge(AuthorityChallenge::advice()).outcome,
            Outcome::AiWin
        );
    }

    #[test]
    fn test_history_is_ignored() {
        let mut rng = ScriptedRng::new([1, 2]);
        let history = [1, 1, 1];

        for _ in 0..5 {
            let ctx = EvalContext::new(&history);
            let result = AuthorityChallenge.evaluate(Stance::Defy, &ctx, &mut rng);
            assert_eq!(result.outcome, Outcome::HumanWin);
        }
        assert_eq!(rng.remaining(), 2);
    }
}
