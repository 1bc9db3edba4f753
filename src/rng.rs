//! Deterministic random number generation for move selection
//!
//! The solver only ever sees a `rand::Rng`, so any source can be injected.
//! `GameRng` is the seedable one the binary and the tests use: the same seed
//! replays the same tie-breaks, and [`GameRng::fork`] hands out independent
//! streams for games played in parallel.

use rand::{Error as RandError, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a new RNG with a seed drawn from the operating system
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent, deterministic stream.
    ///
    /// The n-th fork of a given seed is always the same stream.
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(
            self.seed
                .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15)),
        )
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.inner.try_fill_bytes(dest)
    }
}
