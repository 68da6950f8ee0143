//! The structure returned to callers after an evaluation.

use fairdraw_engine::{Evaluation, EvaluationKind, ProbabilityClass};
use serde::{Deserialize, Serialize};

use crate::records::ClassRecord;

/// Result string plus the classes with updated failure counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    /// Legacy result: `"No Selection"`, a label, or `"[Deterministic] <label>"`.
    pub result: String,
    /// Structured outcome tag.
    pub kind: EvaluationKind,
    /// Label of the winning class, when one won.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_label: Option<String>,
    /// Every class, in input order, after the pass.
    pub updated_classes: Vec<ClassRecord>,
}

impl EvaluationResponse {
    /// Builds the response for `evaluation` over the mutated `classes`.
    #[must_use]
    pub fn new(evaluation: &Evaluation, classes: &[ProbabilityClass]) -> Self {
        Self {
            result: evaluation.to_string(),
            kind: evaluation.kind(),
            class_label: evaluation.draw().map(|draw| draw.class_label.clone()),
            updated_classes: classes.iter().map(ClassRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairdraw_engine::Draw;

    #[test]
    fn test_no_selection_omits_class_label() {
        let classes = vec![ProbabilityClass::new("Rare", 1.0, 0.0, 5, vec![])];
        let response = EvaluationResponse::new(&Evaluation::NoSelection, &classes);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["result"], "No Selection");
        assert_eq!(value["kind"], "no_selection");
        assert!(value.get("classLabel").is_none());
        assert_eq!(value["updatedClasses"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_deterministic_response_carries_prefix() {
        let evaluation = Evaluation::Deterministic(Draw {
            class_index: 0,
            class_label: "Legendary".to_owned(),
            outcome: Some("Crown".to_owned()),
        });
        let response = EvaluationResponse::new(&evaluation, &[]);

        assert_eq!(response.result, "[Deterministic] Crown");
        assert_eq!(response.kind, EvaluationKind::Deterministic);
        assert_eq!(response.class_label.as_deref(), Some("Legendary"));
    }
}
