//! Seeded random number generators.
//!
//! Every generator here is an owned value built from an explicit seed; there
//! is no process-wide RNG state. Two generators created from the same seed
//! produce identical streams.

use ao_core::Real;
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;
use std::fmt;

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
///
/// Implements [`RngCore`], so any `rand_distr` distribution can sample from it.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // 53 high bits → exactly representable doubles in [0, 1)
        (self.rng.next_u64() >> 11) as Real * (1.0 / (1u64 << 53) as Real)
    }
}

impl fmt::Debug for MersenneTwisterUniformRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwisterUniformRng").finish_non_exhaustive()
    }
}

impl RngCore for MersenneTwisterUniformRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.rng.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A standard-normal random number generator.
///
/// Draws from `rand_distr::StandardNormal` on top of a Mersenne Twister
/// stream.
#[derive(Debug)]
pub struct GaussianRng {
    inner: MersenneTwisterUniformRng,
}

impl GaussianRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Generate the next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        self.inner.sample(StandardNormal)
    }
}
