//! Synthetic dataset generation.

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generated values are drawn uniformly from `[0, VALUE_RANGE)`.
pub const VALUE_RANGE: i32 = 1_000_000;

/// Produces arrays of uniformly distributed integers from a caller-owned
/// randomness source.
///
/// The source is injectable so tests and reproducible runs can supply a
/// seeded RNG; it is stateful and must not be shared across concurrent
/// measurements (single-threaded use is assumed).
pub struct DataGenerator<R: RngCore> {
    rng: R,
}

impl DataGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for DataGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator<ChaCha8Rng> {
    /// Deterministic generator for reproducible datasets.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> DataGenerator<R> {
    /// Wraps an arbitrary randomness source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produces `size` integers drawn independently and uniformly from
    /// `[0, VALUE_RANGE)`. A zero size yields an empty dataset.
    pub fn generate(&mut self, size: usize) -> Vec<i32> {
        (0..size)
            .map(|_| self.rng.gen_range(0..VALUE_RANGE))
            .collect()
    }

    /// Picks a random element to use as a search key, or `None` for an
    /// empty dataset.
    pub fn pick_key(&mut self, data: &[i32]) -> Option<i32> {
        if data.is_empty() {
            return None;
        }
        Some(data[self.rng.gen_range(0..data.len())])
    }
}
