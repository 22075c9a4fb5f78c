// src/combat/src/rng.rs

use rand::{Rng, SeedableRng, distr::uniform};
use rand_pcg::Pcg32;

/// Deterministic randomness source for automated play. Always constructed
/// from an explicit seed so that nothing in the engine depends on hidden
/// process-wide RNG state, and tests can replay exact decision sequences.
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: Pcg32,
    seed: u64,
}

impl BattleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the sequence for the current seed.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: uniform::SampleUniform,
        R: uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniform pick from a slice; `None` only when the slice is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.random_range(0..items.len());
            Some(&items[idx])
        }
    }
}
