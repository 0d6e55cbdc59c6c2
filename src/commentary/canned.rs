//! Offline commentator with stock lines.

use super::{Commentator, CommentaryError};
use crate::events::{CommentaryEvent, CommentaryTrigger};

/// Deterministic commentator that needs no text service.
///
/// Each trigger maps to one fixed line. Round triggers append the event
/// context so the player still sees why the round went the way it did.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedCommentator;

impl CannedCommentator {
    #[must_use]
    pub const fn line(trigger: CommentaryTrigger) -> &'static str {
        match trigger {
            CommentaryTrigger::Welcome => {
                "Scene on hai, bhai. Think you can outsmart me? Let's see."
            }
            CommentaryTrigger::AiWin => "Too easy, beta. Samajh rahe ho?",
            CommentaryTrigger::HumanWin => "Lag hai, lag! That one doesn't count.",
            CommentaryTrigger::Draw => "Same pick? Boring. Again!",
            CommentaryTrigger::GameOverWin => {
                "Fine, fine... you got me this time. Don't get used to it."
            }
            CommentaryTrigger::GameOverLose => {
                "Arre, don't be sad. Losing to me is basically a compliment."
            }
        }
    }
}

impl Commentator for CannedCommentator {
    fn commentate(&self, event: &CommentaryEvent) -> Result<String, CommentaryError> {
        let line = Self::line(event.trigger);
        match event.trigger {
            CommentaryTrigger::AiWin | CommentaryTrigger::HumanWin | CommentaryTrigger::Draw
                if !event.context.is_empty() =>
            {
                Ok(format!("{line} ({})", event.context))
            }
            _ => Ok(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trigger_has_a_line() {
        for trigger in CommentaryTrigger::ALL {
            let text = CannedCommentator
                .commentate(&CommentaryEvent::new(trigger, ""))
                .unwrap();
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn test_round_lines_carry_context() {
        let event = CommentaryEvent::new(CommentaryTrigger::AiWin, "My Fire crushed your Grass!");
        let text = CannedCommentator.commentate(&event).unwrap();
        assert!(text.ends_with("(My Fire crushed your Grass!)"));

        let event = CommentaryEvent::new(CommentaryTrigger::GameOverLose, "Final Score: H-1 A-3");
        let text = CannedCommentator.commentate(&event).unwrap();
        assert_eq!(text, CannedCommentator::line(CommentaryTrigger::GameOverLose));
    }
}
