//! Commentary events.
//!
//! The engine emits a `CommentaryEvent` after every state change worth
//! narrating. It carries the trigger tag, free-form context, and the score at
//! the time of emission. The engine never reads commentary back.

use serde::{Deserialize, Serialize};

use crate::core::{MatchState, Outcome, Winner};

/// What happened, as far as the commentator is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentaryTrigger {
    /// Match started.
    Welcome,
    /// Opponent took the round.
    AiWin,
    /// Human took the round.
    HumanWin,
    /// Instinct round tied.
    Draw,
    /// Match over, human won.
    GameOverWin,
    /// Match over, opponent won.
    GameOverLose,
}

impl CommentaryTrigger {
    pub const ALL: [CommentaryTrigger; 6] = [
        CommentaryTrigger::Welcome,
        CommentaryTrigger::AiWin,
        CommentaryTrigger::HumanWin,
        CommentaryTrigger::Draw,
        CommentaryTrigger::GameOverWin,
        CommentaryTrigger::GameOverLose,
    ];

    /// Wire tag, e.g. `GAME_OVER_WIN`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CommentaryTrigger::Welcome => "WELCOME",
            CommentaryTrigger::AiWin => "AI_WIN",
            CommentaryTrigger::HumanWin => "HUMAN_WIN",
            CommentaryTrigger::Draw => "DRAW",
            CommentaryTrigger::GameOverWin => "GAME_OVER_WIN",
            CommentaryTrigger::GameOverLose => "GAME_OVER_LOSE",
        }
    }

    /// Trigger for a scored round.
    #[must_use]
    pub const fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::HumanWin => CommentaryTrigger::HumanWin,
            Outcome::AiWin => CommentaryTrigger::AiWin,
            Outcome::Draw => CommentaryTrigger::Draw,
        }
    }

    /// Trigger for a finished match.
    #[must_use]
    pub const fn for_winner(winner: Winner) -> Self {
        match winner {
            Winner::Human => CommentaryTrigger::GameOverWin,
            Winner::Ai => CommentaryTrigger::GameOverLose,
        }
    }

    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, CommentaryTrigger::GameOverWin | CommentaryTrigger::GameOverLose)
    }
}

impl std::fmt::Display for CommentaryTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for commentary, as handed to the commentary collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryEvent {
    pub trigger: CommentaryTrigger,
    /// Free-form detail: the round reason, or the final score line.
    pub context: String,
    pub human_score: u32,
    pub ai_score: u32,
}

impl CommentaryEvent {
    /// Create an event with a zero score.
    pub fn new(trigger: CommentaryTrigger, context: impl Into<String>) -> Self {
        Self {
            trigger,
            context: context.into(),
            human_score: 0,
            ai_score: 0,
        }
    }

    /// Set the score (builder pattern).
    #[must_use]
    pub fn with_score(mut self, human_score: u32, ai_score: u32) -> Self {
        self.human_score = human_score;
        self.ai_score = ai_score;
        self
    }

    /// Create an event stamped with the current score of `state`.
    pub fn from_state(
        trigger: CommentaryTrigger,
        context: impl Into<String>,
        state: &MatchState,
    ) -> Self {
        Self::new(trigger, context).with_score(state.human_score(), state.ai_score())
    }
}
