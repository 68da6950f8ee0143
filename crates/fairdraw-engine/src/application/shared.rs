//! Thread-safe evaluator handle.

use std::sync::{Arc, Mutex};

use fairdraw_core::error::DomainError;
use tracing::error;

use super::evaluator::Evaluator;
use crate::domain::classes::ProbabilityClass;
use crate::domain::evaluation::Evaluation;

/// A cloneable handle that serializes access to one `Evaluator`.
///
/// The lock is held for the whole roll, select and reseed sequence, so
/// concurrent callers share one continuous stream without interleaving.
#[derive(Debug, Clone)]
pub struct SharedEvaluator {
    inner: Arc<Mutex<Evaluator>>,
}

impl SharedEvaluator {
    /// Wraps an evaluator.
    #[must_use]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(evaluator)),
        }
    }

    /// Validates and evaluates `classes` under the lock.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClass` for malformed classes and
    /// `DomainError::Infrastructure` if the lock was poisoned.
    pub fn evaluate(&self, classes: &mut [ProbabilityClass]) -> Result<Evaluation, DomainError> {
        let mut guard = self.inner.lock().map_err(|e| {
            error!("evaluator mutex poisoned");
            DomainError::Infrastructure(format!("evaluator mutex poisoned: {e}"))
        })?;
        guard.evaluate_checked(classes)
    }
}

impl From<Evaluator> for SharedEvaluator {
    fn from(evaluator: Evaluator) -> Self {
        Self::new(evaluator)
    }
}
