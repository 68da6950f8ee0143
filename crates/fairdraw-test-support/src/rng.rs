//! Test sources — deterministic `RandomSource` implementations for tests.

use fairdraw_core::rng::RandomSource;

/// A source that returns the same word forever.
///
/// `ConstantSource(0)` makes every probability roll `0.0`, so any class with
/// a positive adjusted probability succeeds, and every weighted draw lands on
/// the first positively weighted category. `ConstantSource(u64::MAX)` rolls
/// just under `100.0`, so every class below 100% fails.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource(pub u64);

impl ConstantSource {
    /// A source whose probability rolls always succeed.
    #[must_use]
    pub fn always_succeed() -> Self {
        Self(0)
    }

    /// A source whose probability rolls fail for every class below 100%.
    #[must_use]
    pub fn always_fail() -> Self {
        Self(u64::MAX)
    }
}

impl RandomSource for ConstantSource {
    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn reseed(&mut self, _seed: u64) {}
}

/// A source that returns words from a predetermined sequence. Panics if the
/// sequence is exhausted. Reseeding is recorded but does not change the
/// sequence, so tests can assert on when the engine reseeds.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<u64>,
    index: usize,
    reseeds: Vec<u64>,
}

impl SequenceSource {
    /// Create a new `SequenceSource` with the given values.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            index: 0,
            reseeds: Vec::new(),
        }
    }

    /// Number of words handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Seeds passed to `reseed`, oldest first.
    #[must_use]
    pub fn reseeds(&self) -> &[u64] {
        &self.reseeds
    }
}

impl RandomSource for SequenceSource {
    fn next_u64(&mut self) -> u64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }

    fn reseed(&mut self, seed: u64) {
        self.reseeds.push(seed);
    }
}
