//! Application layer: the stateful evaluators callers hold on to.

pub mod evaluator;
pub mod shared;
