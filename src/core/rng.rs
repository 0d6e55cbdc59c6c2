//! Deterministic random number generation for the scripted opponent.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: The engine only sees the `RandomSource` trait
//! - **Scriptable**: `ScriptedRng` forces specific draws in tests
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use outsmart::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut same = GameRng::new(42);
//!
//! assert_eq!(rng.pick_index(3), same.pick_index(3));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::choice::{Element, Pick, RoundType};

/// Source of uniform random choices.
///
/// Every random decision the engine makes (round type selection and the
/// opponent's draws) goes through this trait so callers can seed or script it.
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`.
    ///
    /// `len` is always at least 1.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Draw a round type uniformly from `RoundType::ALL`.
pub fn pick_round_type<R: RandomSource + ?Sized>(rng: &mut R) -> RoundType {
    RoundType::ALL[rng.pick_index(RoundType::ALL.len())]
}

/// Draw a number uniformly from {1, 2, 3}.
pub fn pick_number<R: RandomSource + ?Sized>(rng: &mut R) -> Pick {
    Pick::ALL[rng.pick_index(Pick::ALL.len())]
}

/// Draw an element uniformly from {Fire, Grass, Water}.
pub fn pick_element<R: RandomSource + ?Sized>(rng: &mut R) -> Element {
    Element::ALL[rng.pick_index(Element::ALL.len())]
}

/// Seeded RNG backing a match.
///
/// Uses ChaCha8 for speed while keeping the stream reproducible across
/// platforms, so a seed fully determines a match given the same moves.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A random source that replays a fixed script of indices first.
///
/// Once the script runs out, draws come from the inner `GameRng`.
/// Scripted values are reduced modulo `len` so any script is usable.
///
/// ```
/// use outsmart::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([0, 2]);
/// assert_eq!(rng.pick_index(3), 0);
/// assert_eq!(rng.pick_index(3), 2);
/// assert!(rng.is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
    fallback: GameRng,
}

impl ScriptedRng {
    /// Create a scripted source with a seed-0 fallback.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self::with_fallback(script, GameRng::new(0))
    }

    /// Create a scripted source with an explicit fallback RNG.
    pub fn with_fallback(script: impl IntoIterator<Item = usize>, fallback: GameRng) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }

    /// Append more scripted indices.
    pub fn push(&mut self, index: usize) {
        self.script.push_back(index);
    }

    /// Number of scripted draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// True once every scripted draw has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        match self.script.pop_front() {
            Some(index) => index % len,
            None => self.fallback.pick_index(len),
        }
    }
}
