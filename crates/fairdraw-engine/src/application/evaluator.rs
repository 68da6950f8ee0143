//! The evaluator: owns both random streams across calls.

use std::fmt;

use fairdraw_core::clock::Clock;
use fairdraw_core::error::DomainError;
use fairdraw_core::rng::RandomSource;
use tracing::{debug, instrument};

use crate::config::{EngineConfig, SeedPair};
use crate::domain::classes::{ProbabilityClass, validate_classes};
use crate::domain::evaluation::{Evaluation, EvaluationReport, evaluate_pass};
use crate::domain::generators::{XorShift64, XorShift128Plus};

/// Evaluates class lists against a persistent pair of random streams.
///
/// The decision stream rolls success or failure; the selection stream draws
/// weighted outcomes. Both continue across calls, so a sequence of
/// evaluations reads one unbroken stream rather than restarting from a seed.
pub struct Evaluator {
    decision: Box<dyn RandomSource>,
    selection: Box<dyn RandomSource>,
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator").finish_non_exhaustive()
    }
}

impl Evaluator {
    /// Creates an evaluator over arbitrary sources.
    #[must_use]
    pub fn new(decision: Box<dyn RandomSource>, selection: Box<dyn RandomSource>) -> Self {
        Self {
            decision,
            selection,
        }
    }

    /// Creates the production generator pair from explicit seeds.
    ///
    /// The selection stream is seeded from the decision stream's first output.
    #[must_use]
    pub fn with_seeds(seed0: u64, seed1: u64) -> Self {
        let mut decision = XorShift128Plus::new(seed0, seed1);
        let selection = XorShift64::new(decision.next_u64());
        Self::new(Box::new(decision), Box::new(selection))
    }

    /// Creates the production generator pair seeded from `clock`.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        let SeedPair(seed0, seed1) = SeedPair::from_clock(clock);
        Self::with_seeds(seed0, seed1)
    }

    /// Creates the production generator pair as `config` directs.
    #[must_use]
    pub fn from_config(config: &EngineConfig, clock: &dyn Clock) -> Self {
        let SeedPair(seed0, seed1) = config.resolve_seeds(clock);
        debug!(explicit = config.seeds.is_some(), "seeding evaluator");
        Self::with_seeds(seed0, seed1)
    }

    /// Runs one pass over `classes`, updating their failure counters in place.
    ///
    /// Assumes the classes are well formed; see `evaluate_checked`.
    #[instrument(skip_all, fields(classes = classes.len()))]
    pub fn evaluate(&mut self, classes: &mut [ProbabilityClass]) -> Evaluation {
        let evaluation = evaluate_pass(classes, &mut *self.decision, &mut *self.selection);
        debug!(kind = evaluation.kind().as_str(), result = %evaluation, "evaluation complete");
        evaluation
    }

    /// Validates `classes`, then evaluates them.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClass` without touching any class or
    /// consuming randomness if validation fails.
    pub fn evaluate_checked(
        &mut self,
        classes: &mut [ProbabilityClass],
    ) -> Result<Evaluation, DomainError> {
        validate_classes(classes)?;
        Ok(self.evaluate(classes))
    }

    /// Evaluates an owned list and hands it back alongside the outcome.
    pub fn evaluate_owned(&mut self, mut classes: Vec<ProbabilityClass>) -> EvaluationReport {
        let evaluation = self.evaluate(&mut classes);
        EvaluationReport {
            evaluation,
            classes,
        }
    }
}
