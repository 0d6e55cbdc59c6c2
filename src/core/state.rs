//! Match state.
//!
//! ## MatchState
//!
//! Everything the caller may observe about one match:
//! - Round number and the current round's mini-game
//! - Scores for both sides
//! - Pattern Trap move history
//! - The pending result of the current round
//!
//! Fields are read through accessors. Mutation is crate-private and only
//! happens through `MatchController`.

use serde::{Deserialize, Serialize};

use super::choice::{Outcome, Pick, RoundType, Winner};
use super::config::MatchConfig;
use super::error::StateCorruption;

/// Result of evaluating one round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    /// Opponent's one-line explanation of the outcome.
    pub reason: String,
}

impl RoundResult {
    pub fn new(outcome: Outcome, reason: impl Into<String>) -> Self {
        Self {
            outcome,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn human_win(reason: impl Into<String>) -> Self {
        Self::new(Outcome::HumanWin, reason)
    }

    #[must_use]
    pub fn ai_win(reason: impl Into<String>) -> Self {
        Self::new(Outcome::AiWin, reason)
    }

    #[must_use]
    pub fn draw(reason: impl Into<String>) -> Self {
        Self::new(Outcome::Draw, reason)
    }
}

/// State of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    // === Progression ===
    round_number: u32,
    active: bool,
    current_round_type: RoundType,

    // === Score ===
    human_score: u32,
    ai_score: u32,
    winner: Option<Winner>,

    // === Round data ===
    /// Every pick submitted to a Pattern Trap round, in order.
    move_history: Vec<u8>,
    pending_result: Option<RoundResult>,
}

impl MatchState {
    /// Fresh state for round 1 of the given type.
    #[must_use]
    pub fn new(first_round: RoundType) -> Self {
        Self {
            round_number: 1,
            active: true,
            current_round_type: first_round,
            human_score: 0,
            ai_score: 0,
            winner: None,
            move_history: Vec::new(),
            pending_result: None,
        }
    }

    // === Accessors ===

    /// Current round, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    #[must_use]
    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }

    /// False once the match has ended.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn current_round_type(&self) -> RoundType {
        self.current_round_type
    }

    #[must_use]
    pub fn move_history(&self) -> &[u8] {
        &self.move_history
    }

    /// Result of the current round, if a move has been submitted.
    #[must_use]
    pub fn pending_result(&self) -> Option<&RoundResult> {
        self.pending_result.as_ref()
    }

    /// Winner of the match, once it is over.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Final score line, e.g. `Final Score: H-3 A-1`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("Final Score: H-{} A-{}", self.human_score, self.ai_score)
    }

    /// Check that this state is reachable under `config`.
    ///
    /// Used when a state arrives from outside the engine, e.g. a restored
    /// snapshot. A state built by `MatchController` always passes.
    pub fn validate(&self, config: &MatchConfig) -> Result<(), StateCorruption> {
        let round = self.round_number;
        if round == 0 {
            return Err(StateCorruption::ZeroRound);
        }
        // Only an advance made past the limit ends the match, so one extra round is reachable.
        if round > config.max_rounds.saturating_add(1) {
            return Err(StateCorruption::RoundPastLimit {
                round,
                max_rounds: config.max_rounds,
            });
        }

        for score in [self.human_score, self.ai_score] {
            if score > config.target_score {
                return Err(StateCorruption::ScoreAboveTarget {
                    score,
                    target: config.target_score,
                });
            }
        }
        let points = self.human_score.saturating_add(self.ai_score);
        if points > round {
            return Err(StateCorruption::TooManyPoints { points, rounds: round });
        }

        if let Some(&bad) = self.move_history.iter().find(|&&n| Pick::new(n).is_none()) {
            return Err(StateCorruption::HistoryOutOfRange(bad));
        }
        if self.move_history.len() > round as usize {
            return Err(StateCorruption::HistoryTooLong {
                picks: self.move_history.len(),
                rounds: round,
            });
        }

        match (self.active, self.winner) {
            (true, None) => Ok(()),
            (false, Some(recorded)) => {
                if recorded != Winner::from_scores(self.human_score, self.ai_score) {
                    Err(StateCorruption::WrongWinner { recorded })
                } else if self.pending_result.is_none() {
                    Err(StateCorruption::MissingFinalResult)
                } else {
                    Ok(())
                }
            }
            _ => Err(StateCorruption::WinnerMismatch),
        }
    }

    // === Mutation (controller only) ===

    pub(crate) fn record_pattern_pick(&mut self, pick: Pick) {
        self.move_history.push(pick.get());
    }

    /// Apply a round result: score it and park it as the pending result.
    pub(crate) fn apply_result(&mut self, result: RoundResult) {
        match result.outcome {
            Outcome::HumanWin => self.human_score += 1,
            Outcome::AiWin => self.ai_score += 1,
            Outcome::Draw => {}
        }
        self.pending_result = Some(result);
    }

    pub(crate) fn finish(&mut self) -> Winner {
        let winner = Winner::from_scores(self.human_score, self.ai_score);
        self.active = false;
        self.winner = Some(winner);
        winner
    }

    pub(crate) fn next_round(&mut self, round_type: RoundType) {
        self.round_number += 1;
        self.current_round_type = round_type;
        self.pending_result = None;
    }
}
