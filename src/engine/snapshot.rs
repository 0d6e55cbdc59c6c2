//! Match checkpoints.
//!
//! A snapshot captures everything needed to resume a match in another
//! request handler or worker: rules, state, and the RNG position. Pending
//! commentary events are not included; drain them before snapshotting.

use serde::{Deserialize, Serialize};

use super::controller::MatchController;
use crate::core::{EngineError, GameRng, GameRngState, MatchConfig, MatchState};

/// Serializable checkpoint of a `MatchController<GameRng>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: MatchConfig,
    pub state: MatchState,
    pub rng: GameRngState,
}

impl MatchSnapshot {
    /// Encode with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}

impl MatchController<GameRng> {
    /// Capture the match at this point.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config().clone(),
            state: self.state().clone(),
            rng: self.rng().state(),
        }
    }

    /// Rebuild a controller that continues exactly where `snapshot` left off.
    ///
    /// The state is checked against the snapshot's rules first; a state the
    /// engine could not have produced is refused.
    pub fn restore(snapshot: MatchSnapshot) -> Result<Self, EngineError> {
        snapshot.config.validate()?;
        snapshot
            .state
            .validate(&snapshot.config)
            .map_err(|e| EngineError::Snapshot(e.to_string()))?;
        let rng = GameRng::from_state(&snapshot.rng);
        Ok(Self::from_parts(snapshot.config, snapshot.state, rng))
    }
}
