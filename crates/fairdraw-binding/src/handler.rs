//! Decode, evaluate, encode.

use fairdraw_engine::SharedEvaluator;
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::BindingError;
use crate::request::parse_classes;
use crate::response::EvaluationResponse;

/// Evaluates a JSON class list and returns the caller-facing response.
///
/// # Errors
///
/// Returns `BindingError` if the list is not an array, a record is malformed,
/// a class fails validation, or the evaluator lock is poisoned.
#[instrument(skip_all)]
pub fn evaluate_json(
    evaluator: &SharedEvaluator,
    classes: &Value,
) -> Result<EvaluationResponse, BindingError> {
    let mut classes = parse_classes(classes)?;
    let evaluation = evaluator.evaluate(&mut classes)?;
    info!(kind = evaluation.kind().as_str(), result = %evaluation, "trial evaluated");
    Ok(EvaluationResponse::new(&evaluation, &classes))
}
