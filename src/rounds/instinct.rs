//! Instinct Round: Fire beats Grass, Grass beats Water, Water beats Fire.

use super::{EvalContext, RoundEvaluator};
use crate::core::{pick_element, Element, RandomSource, RoundResult, RoundType};

/// Instinct Round evaluator.
///
/// The opponent draws an element uniformly. Equal elements draw; otherwise
/// the cyclic relation decides.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstinctRound;

impl InstinctRound {
    /// Judge a human element against a known opponent element.
    #[must_use]
    pub fn judge(human: Element, ai: Element) -> RoundResult {
        if human == ai {
            RoundResult::draw(format!("We both picked {ai}. Dull... Go again!"))
        } else if human.beats(ai) {
            RoundResult::human_win(format!("My {ai} got destroyed by your {human}!"))
        } else {
            RoundResult::ai_win(format!("My {ai} crushed your {human}!"))
        }
    }
}

impl RoundEvaluator for InstinctRound {
    type Choice = Element;

    fn round_type(&self) -> RoundType {
        RoundType::Instinct
    }

    fn evaluate(
        &self,
        choice: Element,
        _ctx: &EvalContext<'_>,
        rng: &mut dyn RandomSource,
    ) -> RoundResult {
        let ai = pick_element(rng);
        Self::judge(choice, ai)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, ScriptedRng};

    fn play(human: Element, ai_index: usize) -> RoundResult {
        let mut rng = ScriptedRng::new([ai_index]);
        InstinctRound.evaluate(human, &EvalContext::default(), &mut rng)
    }

    #[test]
    fn test_fire_against_each() {
        // AI index 0 = Fire, 1 = Grass, 2 = Water
        assert_eq!(play(Element::Fire, 1).outcome, Outcome::HumanWin);
        assert_eq!(play(Element::Fire, 2).outcome, Outcome::AiWin);
        assert_eq!(play(Element::Fire, 0).outcome, Outcome::Draw);
    }

    #[test]
    fn test_all_rotations() {
        for human in Element::ALL {
            assert_eq!(InstinctRound::judge(human, human.prey()).outcome, Outcome::HumanWin);
            assert_eq!(InstinctRound::judge(human.prey(), human).outcome, Outcome::AiWin);
            assert_eq!(InstinctRound::judge(human, human).outcome, Outcome::Draw);
        }
    }

    #[test]
    fn test_reasons_name_elements() {
        assert_eq!(
            play(Element::Water, 0).reason,
            "My Fire got destroyed by your Water!"
        );
        assert_eq!(play(Element::Grass, 0).reason, "My Fire crushed your Grass!");
        assert_eq!(
            play(Element::Grass, 1).reason,
            "We both picked Grass. Dull... Go again!"
        );
    }
}
