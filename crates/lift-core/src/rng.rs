//! Deterministic simulation-level RNG.
//!
//! The dispatcher draws rider destinations from a single [`SimRng`] seeded
//! from `BuildingConfig::seed`; the same seed and the same call sequence
//! always produce the same riders.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for single-threaded simulation-level draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
