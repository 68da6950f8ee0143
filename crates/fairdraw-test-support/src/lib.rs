//! Shared test doubles for the fairdraw probability engine.

mod clock;
mod rng;

pub use clock::FixedClock;
pub use rng::{ConstantSource, SequenceSource};
