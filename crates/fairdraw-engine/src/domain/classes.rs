//! Probability classes and their outcome categories.

use fairdraw_core::error::DomainError;
use tracing::warn;

/// Upper bound for any probability, in percent.
pub const MAX_PROBABILITY: f64 = 100.0;

/// One possible prize within a class, weighted relative to its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeCategory {
    /// Text returned when this category is drawn.
    pub label: String,
    /// Relative weight; zero means never drawn while any sibling is positive.
    pub weight: u32,
}

impl OutcomeCategory {
    /// Creates a category.
    #[must_use]
    pub fn new(label: impl Into<String>, weight: u32) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// One tier in an ordered evaluation list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityClass {
    /// Display name of the tier.
    pub class_label: String,
    /// Base success chance in percent, `[0, 100]`.
    pub initial_probability: f64,
    /// Percentage points added per consecutive failure.
    pub incremental_bias_rate: f64,
    /// Failures since the last success. The only field evaluation mutates.
    pub consecutive_failures: u32,
    /// Failure count at which success is forced.
    pub deterministic_limit: u32,
    /// Weighted prizes drawn on success.
    pub category_outcomes: Vec<OutcomeCategory>,
}

impl ProbabilityClass {
    /// Creates a class with no recorded failures.
    #[must_use]
    pub fn new(
        class_label: impl Into<String>,
        initial_probability: f64,
        incremental_bias_rate: f64,
        deterministic_limit: u32,
        category_outcomes: Vec<OutcomeCategory>,
    ) -> Self {
        Self {
            class_label: class_label.into(),
            initial_probability,
            incremental_bias_rate,
            consecutive_failures: 0,
            deterministic_limit,
            category_outcomes,
        }
    }

    /// Success chance for the next roll, after pity, clamped to 100%.
    #[must_use]
    pub fn adjusted_probability(&self) -> f64 {
        let escalated = self.initial_probability
            + f64::from(self.consecutive_failures) * self.incremental_bias_rate;
        escalated.min(MAX_PROBABILITY)
    }

    /// Whether the failure count has reached the forced-success threshold.
    #[must_use]
    pub fn is_deterministic_due(&self) -> bool {
        self.consecutive_failures >= self.deterministic_limit
    }

    pub(crate) fn record_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub(crate) fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    /// Checks the fields the evaluator assumes are well formed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClass` naming the first offending field.
    pub fn validate(&self, index: usize) -> Result<(), DomainError> {
        let reason = if !self.initial_probability.is_finite() {
            Some("initial probability must be a finite number".to_owned())
        } else if !(0.0..=MAX_PROBABILITY).contains(&self.initial_probability) {
            Some(format!(
                "initial probability {} is outside 0..=100",
                self.initial_probability
            ))
        } else if !self.incremental_bias_rate.is_finite() {
            Some("incremental bias rate must be a finite number".to_owned())
        } else if self.incremental_bias_rate < 0.0 {
            Some(format!(
                "incremental bias rate {} is negative",
                self.incremental_bias_rate
            ))
        } else if self.deterministic_limit == 0 {
            Some("deterministic limit must be greater than zero".to_owned())
        } else {
            None
        };

        match reason {
            None => Ok(()),
            Some(reason) => {
                warn!(index, label = %self.class_label, %reason, "rejected probability class");
                Err(DomainError::InvalidClass {
                    index,
                    label: self.class_label.clone(),
                    reason,
                })
            }
        }
    }
}

/// Validates every class in evaluation order.
///
/// # Errors
///
/// Returns the first `DomainError::InvalidClass` encountered.
pub fn validate_classes(classes: &[ProbabilityClass]) -> Result<(), DomainError> {
    classes
        .iter()
        .enumerate()
        .try_for_each(|(index, class)| class.validate(index))
}
