//! The match state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! start_match ──▶ submit_move ──▶ advance_round ──┬──▶ submit_move ...
//!                                                 └──▶ game over
//! ```
//!
//! `submit_move` and `advance_round` alternate strictly. Calling either out of
//! turn is an error and leaves the match untouched.
//!
//! ## Example
//!
//! ```
//! use outsmart::core::{MatchConfig, Move, Outcome, ScriptedRng};
//! use outsmart::engine::MatchController;
//!
//! // Round type index 0 (Pattern), then the opponent guesses index 1 (a 2).
//! let rng = ScriptedRng::new([0, 1]);
//! let mut game = MatchController::with_rng(MatchConfig::default(), rng).unwrap();
//!
//! let result = game.submit_move(Move::Number(2)).unwrap();
//! assert_eq!(result.outcome, Outcome::AiWin);
//! assert_eq!(game.state().ai_score(), 1);
//!
//! game.advance_round().unwrap();
//! assert_eq!(game.state().round_number(), 2);
//! assert!(game.state().pending_result().is_none());
//! ```

use crate::core::{
    pick_round_type, ConfigError, Element, EngineError, GameRng, MatchConfig, MatchState, Move,
    MoveRejection, Pick, RandomSource, RoundResult, RoundType, StateRejection, Winner,
};
use crate::events::{CommentaryEvent, CommentaryTrigger, EventQueue};
use crate::rounds::{AuthorityChallenge, EvalContext, InstinctRound, PatternTrap, RoundEvaluator};

/// Context attached to the opening `Welcome` event.
pub const WELCOME_CONTEXT: &str = "Game Start";

/// What `advance_round` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A new round began with this type.
    Next(RoundType),
    /// The match ended.
    GameOver(Winner),
}

/// Owns one match: its state, its RNG, and its outgoing events.
///
/// Every session gets its own controller; nothing is shared between them.
#[derive(Clone, Debug)]
pub struct MatchController<R: RandomSource = GameRng> {
    config: MatchConfig,
    state: MatchState,
    rng: R,
    events: EventQueue,
}

impl MatchController<GameRng> {
    /// Start a match with default rules and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let config = MatchConfig::default().with_seed(seed);
        Self::start(config, GameRng::new(seed))
    }

    /// Start a match with custom rules, seeded from `config.seed`.
    pub fn with_config(config: MatchConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> MatchController<R> {
    /// Start a match drawing all randomness from `rng`.
    pub fn with_rng(config: MatchConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, rng))
    }

    fn start(config: MatchConfig, mut rng: R) -> Self {
        let first = pick_round_type(&mut rng);
        let mut controller = Self {
            config,
            state: MatchState::new(first),
            rng,
            events: EventQueue::new(),
        };
        controller.announce_start();
        controller
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.state.winner()
    }

    /// Events emitted but not yet drained.
    #[must_use]
    pub fn pending_events(&self) -> &[CommentaryEvent] {
        self.events.pending()
    }

    /// Take every emitted event, oldest first.
    pub fn drain_events(&mut self) -> Vec<CommentaryEvent> {
        self.events.drain().collect()
    }

    // === Operations ===

    /// Begin a fresh match in place: round 1, zero scores, empty history,
    /// a randomly chosen round type, and a `Welcome` event.
    pub fn start_match(&mut self) {
        let first = pick_round_type(&mut self.rng);
        self.state = MatchState::new(first);
        self.announce_start();
    }

    /// Throw the current match away and start a new one.
    ///
    /// Undrained events from the old match are discarded.
    pub fn reset_match(&mut self) {
        self.events.clear();
        self.start_match();
    }

    /// Play the current round.
    ///
    /// Pattern and Instinct rounds take `Move::Number(1..=3)`; Authority
    /// rounds take `Move::Authority`. On success the score is updated, the
    /// result is parked as the pending result, and a round event is emitted.
    pub fn submit_move(&mut self, choice: impl Into<Move>) -> Result<RoundResult, EngineError> {
        let choice = choice.into();

        if !self.state.is_active() {
            return Err(MoveRejection::MatchOver.into());
        }
        if self.state.pending_result().is_some() {
            return Err(MoveRejection::AlreadySubmitted.into());
        }

        let round = self.state.current_round_type();
        let result = match (round, choice) {
            (RoundType::Pattern, Move::Number(n)) => {
                let pick = Pick::new(n).ok_or(MoveRejection::OutOfRange(n))?;
                // Predict from the history as it was before this pick.
                let ctx = EvalContext::new(self.state.move_history());
                let result = PatternTrap.evaluate(pick, &ctx, &mut self.rng);
                self.state.record_pattern_pick(pick);
                result
            }
            (RoundType::Instinct, Move::Number(n)) => {
                let pick = Pick::new(n).ok_or(MoveRejection::OutOfRange(n))?;
                let ctx = EvalContext::new(self.state.move_history());
                InstinctRound.evaluate(Element::from_pick(pick), &ctx, &mut self.rng)
            }
            (RoundType::Authority, Move::Authority(stance)) => {
                let ctx = EvalContext::new(self.state.move_history());
                AuthorityChallenge.evaluate(stance, &ctx, &mut self.rng)
            }
            (round, got) => {
                let expected = if round.takes_number() { "number" } else { "stance" };
                return Err(MoveRejection::WrongKind { round, expected, got }.into());
            }
        };

        log::debug!(
            "round {} ({}): human played {} -> {}",
            self.state.round_number(),
            round.as_str(),
            choice,
            result.outcome
        );

        self.state.apply_result(result.clone());
        self.emit(CommentaryTrigger::for_outcome(result.outcome), result.reason.clone());

        Ok(result)
    }

    /// Close the current round and either start the next one or end the match.
    ///
    /// The match ends when either score has reached the target, or when the
    /// round number already exceeds the round limit. A tied score at that
    /// point goes to the AI. On game over the final round's result stays
    /// pending so it can still be shown.
    pub fn advance_round(&mut self) -> Result<RoundAdvance, EngineError> {
        if !self.state.is_active() {
            return Err(StateRejection::MatchOver.into());
        }
        if self.state.pending_result().is_none() {
            return Err(StateRejection::NoPendingResult.into());
        }

        if self.is_finished() {
            let winner = self.state.finish();
            let context = self.state.score_line();
            log::info!(
                "match over after round {}: {} wins, {}",
                self.state.round_number(),
                winner,
                context
            );
            self.emit(CommentaryTrigger::for_winner(winner), context);
            return Ok(RoundAdvance::GameOver(winner));
        }

        let next = pick_round_type(&mut self.rng);
        self.state.next_round(next);
        log::debug!("round {} begins: {}", self.state.round_number(), next);

        Ok(RoundAdvance::Next(next))
    }

    // === Internals ===

    fn is_finished(&self) -> bool {
        let target = self.config.target_score;
        self.state.human_score() >= target
            || self.state.ai_score() >= target
            || self.state.round_number() > self.config.max_rounds
    }

    fn announce_start(&mut self) {
        log::debug!("match started, round 1: {}", self.state.current_round_type());
        self.emit(CommentaryTrigger::Welcome, WELCOME_CONTEXT);
    }

    fn emit(&mut self, trigger: CommentaryTrigger, context: impl Into<String>) {
        let event = CommentaryEvent::from_state(trigger, context, &self.state);
        self.events.push(event);
    }

    pub(crate) fn from_parts(config: MatchConfig, state: MatchState, rng: R) -> Self {
        Self {
            config,
            state,
            rng,
            events: EventQueue::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, ScriptedRng, Stance};

    fn scripted(script: impl IntoIterator<Item = usize>) -> MatchController<ScriptedRng> {
        MatchController::with_rng(MatchConfig::default(), ScriptedRng::new(script)).unwrap()
    }

    #[test]
    fn test_start_emits_welcome() {
        let game = MatchController::new(42);

        assert!(game.is_active());
        assert_eq!(game.state().round_number(), 1);
        assert_eq!(game.pending_events().len(), 1);

        let welcome = &game.pending_events()[0];
        assert_eq!(welcome.trigger, CommentaryTrigger::Welcome);
        assert_eq!(welcome.context, WELCOME_CONTEXT);
    }

    #[test]
    fn test_pattern_history_recorded_after_prediction() {
        // Pattern, guess 1 (human 2 wins), Pattern again, then a repeat of 2.
        let mut game = scripted([0, 0, 0]);

        let first = game.submit_move(Move::Number(2)).unwrap();
        assert_eq!(first.outcome, Outcome::HumanWin);
        assert_eq!(game.state().move_history(), &[2]);

        game.advance_round().unwrap();
        assert_eq!(game.state().current_round_type(), RoundType::Pattern);

        let second = game.submit_move(Move::Number(2)).unwrap();
        assert_eq!(second.outcome, Outcome::AiWin);
        assert_eq!(second.reason, crate::rounds::pattern::REPEAT_REASON);
        assert_eq!(game.state().move_history(), &[2, 2]);
    }

    #[test]
    fn test_history_only_tracks_pattern_rounds() {
        // Instinct (AI Fire), then Authority.
        let mut game = scripted([2, 0, 1]);

        game.submit_move(Move::Number(1)).unwrap();
        game.advance_round().unwrap();
        game.submit_move(Stance::Defy).unwrap();

        assert!(game.state().move_history().is_empty());
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let mut game = scripted([1]);
        let before = game.state().clone();

        let err = game.submit_move(Move::Number(1)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidMove(MoveRejection::WrongKind { round: RoundType::Authority, .. })
        ));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_out_of_range_rejected_without_draw() {
        let mut game = scripted([0, 1]);

        let err = game.submit_move(Move::Number(4)).unwrap_err();
        assert_eq!(err, EngineError::InvalidMove(MoveRejection::OutOfRange(4)));
        assert_eq!(game.rng().remaining(), 1);
        assert!(game.state().move_history().is_empty());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut game = scripted([1]);
        game.submit_move(Stance::Obey).unwrap();
        let before = game.state().clone();

        let err = game.submit_move(Stance::Defy).unwrap_err();
        assert_eq!(err, EngineError::InvalidMove(MoveRejection::AlreadySubmitted));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_round_event_carries_reason_and_score() {
        let mut game = scripted([1]);
        game.drain_events();

        game.submit_move(Stance::Defy).unwrap();
        let events = game.drain_events();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].trigger, CommentaryTrigger::HumanWin);
        assert_eq!(events[0].context, crate::rounds::authority::SAW_THROUGH_REASON);
        assert_eq!((events[0].human_score, events[0].ai_score), (1, 0));
    }

    #[test]
    fn test_reset_starts_over() {
        let mut game = scripted([1, 0]);
        game.submit_move(Stance::Obey).unwrap();
        game.reset_match();

        assert_eq!(game.state().round_number(), 1);
        assert_eq!(game.state().ai_score(), 0);
        assert_eq!(game.state().current_round_type(), RoundType::Pattern);
        assert!(game.state().pending_result().is_none());

        let events = game.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].trigger, CommentaryTrigger::Welcome);
    }

    #[test]
    fn test_config_validated() {
        let config = MatchConfig::default().with_target_score(0);
        let err = MatchController::with_config(config).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTargetScore);
    }

    #[test]
    fn test_short_match_config() {
        // First to 1: Authority round, defy, match over.
        let config = MatchConfig::default().with_target_score(1);
        let mut game = MatchController::with_rng(config, ScriptedRng::new([1])).unwrap();

        game.submit_move(Stance::Defy).unwrap();
        assert_eq!(game.advance_round().unwrap(), RoundAdvance::GameOver(Winner::Human));
    }
}
