//! The two xorshift generators the evaluator runs on.
//!
//! `XorShift64` is the cheap selection stream. `XorShift128Plus` carries an
//! extra state word for better statistical quality and drives the
//! success/failure roll.

use fairdraw_core::rng::RandomSource;

/// Substituted for a zero `XorShift64` seed, since zero is a fixed point.
pub const XORSHIFT64_DEFAULT_SEED: u64 = 1;

/// Substituted for zero `XorShift128Plus` seed words.
pub const XORSHIFT128_DEFAULT_SEEDS: [u64; 2] = [1, 2];

/// Single-word xorshift generator used for weighted selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator; a zero seed is replaced with 1.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            XORSHIFT64_DEFAULT_SEED
        } else {
            seed
        };
        Self { state }
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 21;
        self.state ^= self.state >> 35;
        self.state ^= self.state << 4;
        self.state
    }

    fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

/// Two-word xorshift128+ generator used for probability rolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift128Plus {
    state: [u64; 2],
}

impl XorShift128Plus {
    /// Creates a generator; zero words are replaced with 1 and 2.
    #[must_use]
    pub fn new(seed0: u64, seed1: u64) -> Self {
        let [default0, default1] = XORSHIFT128_DEFAULT_SEEDS;
        Self {
            state: [
                if seed0 == 0 { default0 } else { seed0 },
                if seed1 == 0 { default1 } else { seed1 },
            ],
        }
    }
}

impl RandomSource for XorShift128Plus {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state[0];
        let y = self.state[1];
        self.state[0] = y;
        x ^= x << 23;
        self.state[1] = x ^ y ^ (x >> 17) ^ (y >> 26);
        self.state[1].wrapping_add(y)
    }

    /// Reseeds from a single word, keeping the second word derived from it.
    fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed, seed.rotate_left(32));
    }
}
