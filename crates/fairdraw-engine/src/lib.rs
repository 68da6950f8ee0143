//! Fairdraw Engine — adaptive-probability evaluation.
//!
//! Evaluates an ordered list of probability classes, escalating each class's
//! success chance after consecutive failures and forcing success once a
//! failure limit is reached. Winning classes draw a weighted outcome.

pub mod application;
pub mod config;
pub mod domain;

pub use application::evaluator::Evaluator;
pub use application::shared::SharedEvaluator;
pub use config::{ConfigError, EngineConfig, SeedPair};
pub use domain::classes::{OutcomeCategory, ProbabilityClass, validate_classes};
pub use domain::evaluation::{Draw, Evaluation, EvaluationKind, EvaluationReport};
