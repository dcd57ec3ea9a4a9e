//! Randomness for the computer opponent.
//!
//! The engine owns its random source instead of reaching for a process-wide
//! generator. Production sessions use [`SessionRng`]; tests plug in a
//! scripted source so automated moves are predictable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform choices among `len` options.
pub trait RandomSource {
    /// Returns an index in `0..len`, uniformly distributed.
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seeded per-session generator.
///
/// ChaCha8 keeps the sequence reproducible for a given seed, which makes a
/// logged seed enough to replay a session's computer moves.
#[derive(Clone, Debug)]
pub struct SessionRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SessionRng {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator with a seed drawn from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
