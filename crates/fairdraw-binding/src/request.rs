//! Decoding caller-supplied class lists.

use fairdraw_engine::ProbabilityClass;
use serde::Deserialize;
use serde_json::Value;

use crate::error::BindingError;
use crate::records::ClassRecord;

/// Decodes a JSON array of class records.
///
/// Only shape is checked here; value ranges are validated by the engine.
///
/// # Errors
///
/// Returns `BindingError::NotAnArray` if `value` is not an array and
/// `BindingError::MalformedClass` for the first record that fails to decode.
pub fn parse_classes(value: &Value) -> Result<Vec<ProbabilityClass>, BindingError> {
    let records = value.as_array().ok_or(BindingError::NotAnArray)?;
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            ClassRecord::deserialize(record)
                .map(ProbabilityClass::from)
                .map_err(|source| BindingError::MalformedClass { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_array_is_rejected() {
        for value in [json!(null), json!({}), json!("classes"), json!(3)] {
            assert!(matches!(parse_classes(&value), Err(BindingError::NotAnArray)));
        }
    }

    #[test]
    fn test_empty_array_is_accepted() {
        assert!(parse_classes(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_record_reports_index() {
        let value = json!([
            {
                "classLabel": "Ok",
                "initialProbability": 10,
                "incrementalBiasRate": 1,
                "deterministicLimit": 2
            },
            { "classLabel": "Broken" }
        ]);
        match parse_classes(&value).unwrap_err() {
            BindingError::MalformedClass { index, .. } => assert_eq!(index, 1),
            other => panic!("expected MalformedClass, got {other:?}"),
        }
    }

    #[test]
    fn test_preserves_order() {
        let value = json!([
            {
                "classLabel": "A",
                "initialProbability": 1,
                "incrementalBiasRate": 0,
                "deterministicLimit": 1
            },
            {
                "classLabel": "B",
                "initialProbability": 2,
                "incrementalBiasRate": 0,
                "deterministicLimit": 1
            }
        ]);
        let labels: Vec<String> = parse_classes(&value)
            .unwrap()
            .into_iter()
            .map(|c| c.class_label)
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
    }
}
