//! Random source abstraction for determinism.
//!
//! In production, evaluation draws from the xorshift generators in the
//! engine crate. In tests and replays, a seeded or recorded implementation
//! is injected.

use std::num::{NonZeroU32, NonZeroU64};

use rand::{RngCore, SeedableRng};

/// Abstraction over a stream of random 64-bit words.
pub trait RandomSource: Send {
    /// Advances the stream and returns the next raw word.
    fn next_u64(&mut self) -> u64;

    /// Restarts the stream from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }

    /// Generate a random `u64` in `[1, max]` inclusive.
    ///
    /// Reduction is by modulus, so values are very slightly biased toward the
    /// low end when `max` does not divide 2^64.
    fn next_uniform_u64(&mut self, max: NonZeroU64) -> u64 {
        self.next_u64() % max.get() + 1
    }

    /// Generate a random `u32` in `[1, max]` inclusive.
    fn next_uniform_int(&mut self, max: NonZeroU32) -> u32 {
        let value = self.next_uniform_u64(NonZeroU64::from(max));
        u32::try_from(value).unwrap_or(max.get())
    }
}

/// Maps a raw word onto `[0.0, 1.0)` using its top 53 bits.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1_u64 << 53) as f64
}

/// Adapts any seedable `rand` generator into a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    inner: R,
}

impl<R> RandSource<R>
where
    R: RngCore + SeedableRng + Send,
{
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Creates the wrapped generator from a 64-bit seed.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }
}

impl<R> RandomSource for RandSource<R>
where
    R: RngCore + SeedableRng + Send,
{
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn reseed(&mut self, seed: u64) {
        self.inner = R::seed_from_u64(seed);
    }
}
