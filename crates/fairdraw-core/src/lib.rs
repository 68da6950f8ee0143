//! Fairdraw Core — shared abstractions.
//!
//! This crate defines the traits and error types the evaluation engine and
//! its callers depend on. It contains no evaluation logic.

pub mod clock;
pub mod error;
pub mod rng;
