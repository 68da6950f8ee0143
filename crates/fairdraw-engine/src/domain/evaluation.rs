//! Evaluation results and the single left-to-right pass over a class list.

use std::fmt;

use fairdraw_core::rng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classes::{MAX_PROBABILITY, ProbabilityClass};
use super::selection::select_weighted_outcome;

/// Text reported when nothing was selected.
pub const NO_SELECTION: &str = "No Selection";

/// Prefix marking a forced success in the legacy result string.
pub const DETERMINISTIC_PREFIX: &str = "[Deterministic] ";

/// The class that won a pass and the category drawn from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Position of the winning class in the evaluated list.
    pub class_index: usize,
    /// Label of the winning class.
    pub class_label: String,
    /// Drawn category label; `None` when the class had nothing to draw.
    pub outcome: Option<String>,
}

impl Draw {
    /// The drawn label, or `"No Selection"` for an empty or zero-weight pool.
    #[must_use]
    pub fn outcome_text(&self) -> &str {
        self.outcome.as_deref().unwrap_or(NO_SELECTION)
    }
}

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Every class failed its roll.
    NoSelection,
    /// A class won its probability roll.
    Probabilistic(Draw),
    /// A class reached its failure limit and was forced to succeed.
    Deterministic(Draw),
}

impl Evaluation {
    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> EvaluationKind {
        match self {
            Self::NoSelection => EvaluationKind::NoSelection,
            Self::Probabilistic(_) => EvaluationKind::Probabilistic,
            Self::Deterministic(_) => EvaluationKind::Deterministic,
        }
    }

    /// The winning draw, if any class succeeded.
    #[must_use]
    pub fn draw(&self) -> Option<&Draw> {
        match self {
            Self::NoSelection => None,
            Self::Probabilistic(draw) | Self::Deterministic(draw) => Some(draw),
        }
    }

    /// The drawn category label, if one was drawn.
    #[must_use]
    pub fn outcome(&self) -> Option<&str> {
        self.draw().and_then(|draw| draw.outcome.as_deref())
    }
}

/// Renders the legacy result string: `"No Selection"`, a bare label, or a
/// label prefixed with `"[Deterministic] "`.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => f.write_str(NO_SELECTION),
            Self::Probabilistic(draw) => f.write_str(draw.outcome_text()),
            Self::Deterministic(draw) => {
                write!(f, "{DETERMINISTIC_PREFIX}{}", draw.outcome_text())
            }
        }
    }
}

/// Variant tag of an `Evaluation`, for callers that branch on structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    /// No class succeeded.
    NoSelection,
    /// A probability roll succeeded.
    Probabilistic,
    /// A failure limit forced success.
    Deterministic,
}

impl EvaluationKind {
    /// Snake-case name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoSelection => "no_selection",
            Self::Probabilistic => "probabilistic",
            Self::Deterministic => "deterministic",
        }
    }
}

/// An evaluation together with the class list it mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    /// Outcome of the pass.
    pub evaluation: Evaluation,
    /// The classes with updated failure counters.
    pub classes: Vec<ProbabilityClass>,
}

/// Runs one pass over `classes` in priority order.
///
/// A class whose failure count has reached its limit wins outright. Otherwise
/// the decision stream rolls in `[0, 100)` against the adjusted probability;
/// a roll equal to the threshold fails. The first winner ends the pass, so
/// later classes consume no randomness and keep their counters. After a
/// probabilistic win the selection stream is reseeded from the decision
/// stream.
pub fn evaluate_pass(
    classes: &mut [ProbabilityClass],
    decision: &mut dyn RandomSource,
    selection: &mut dyn RandomSource,
) -> Evaluation {
    for (class_index, class) in classes.iter_mut().enumerate() {
        if class.is_deterministic_due() {
            debug!(
                class = %class.class_label,
                failures = class.consecutive_failures,
                limit = class.deterministic_limit,
                "deterministic override"
            );
            class.record_success();
            let outcome = select_weighted_outcome(&class.category_outcomes, selection)
                .map(|category| category.label.clone());
            return Evaluation::Deterministic(Draw {
                class_index,
                class_label: class.class_label.clone(),
                outcome,
            });
        }

        let adjusted = class.adjusted_probability();
        let roll = decision.next_f64() * MAX_PROBABILITY;
        debug!(class = %class.class_label, roll, adjusted, "probability roll");

        if roll < adjusted {
            class.record_success();
            let outcome = select_weighted_outcome(&class.category_outcomes, selection)
                .map(|category| category.label.clone());
            selection.reseed(decision.next_u64());
            return Evaluation::Probabilistic(Draw {
                class_index,
                class_label: class.class_label.clone(),
                outcome,
            });
        }

        class.record_failure();
    }

    Evaluation::NoSelection
}
