//! Domain layer for probability evaluation.

pub mod classes;
pub mod evaluation;
pub mod generators;
pub mod selection;
