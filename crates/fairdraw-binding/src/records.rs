//! Wire records mirroring the caller's camelCase class objects.

use fairdraw_engine::{OutcomeCategory, ProbabilityClass};
use serde::{Deserialize, Serialize};

/// Wire form of an `OutcomeCategory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category label.
    pub label: String,
    /// Relative weight.
    pub weight: u32,
}

/// Wire form of a `ProbabilityClass`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Class label.
    pub class_label: String,
    /// Base success chance in percent.
    pub initial_probability: f64,
    /// Percentage points added per consecutive failure.
    pub incremental_bias_rate: f64,
    /// Failures since the last success; absent means zero.
    #[serde(default)]
    pub consecutive_failures: u32,
    /// Failure count that forces success.
    pub deterministic_limit: u32,
    /// Weighted outcomes drawn on success.
    #[serde(default)]
    pub category_outcomes: Vec<CategoryRecord>,
}

impl From<CategoryRecord> for OutcomeCategory {
    fn from(record: CategoryRecord) -> Self {
        Self::new(record.label, record.weight)
    }
}

impl From<&OutcomeCategory> for CategoryRecord {
    fn from(category: &OutcomeCategory) -> Self {
        Self {
            label: category.label.clone(),
            weight: category.weight,
        }
    }
}

impl From<ClassRecord> for ProbabilityClass {
    fn from(record: ClassRecord) -> Self {
        Self {
            class_label: record.class_label,
            initial_probability: record.initial_probability,
            incremental_bias_rate: record.incremental_bias_rate,
            consecutive_failures: record.consecutive_failures,
            deterministic_limit: record.deterministic_limit,
            category_outcomes: record
                .category_outcomes
                .into_iter()
                .map(OutcomeCategory::from)
                .collect(),
        }
    }
}

impl From<&ProbabilityClass> for ClassRecord {
    fn from(class: &ProbabilityClass) -> Self {
        Self {
            class_label: class.class_label.clone(),
            initial_probability: class.initial_probability,
            incremental_bias_rate: class.incremental_bias_rate,
            consecutive_failures: class.consecutive_failures,
            deterministic_limit: class.deterministic_limit,
            category_outcomes: class
                .category_outcomes
                .iter()
                .map(CategoryRecord::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_uses_camel_case_fields() {
        let record: ClassRecord = serde_json::from_value(json!({
            "classLabel": "Epic",
            "initialProbability": 2.5,
            "incrementalBiasRate": 0.5,
            "consecutiveFailures": 7,
            "deterministicLimit": 30,
            "categoryOutcomes": [{ "label": "Staff", "weight": 4 }]
        }))
        .unwrap();

        let class = ProbabilityClass::from(record);
        assert_eq!(class.class_label, "Epic");
        assert_eq!(class.consecutive_failures, 7);
        assert_eq!(class.deterministic_limit, 30);
        assert_eq!(class.category_outcomes, vec![OutcomeCategory::new("Staff", 4)]);
    }

    #[test]
    fn test_missing_counter_and_outcomes_default() {
        let record: ClassRecord = serde_json::from_value(json!({
            "classLabel": "Plain",
            "initialProbability": 50,
            "incrementalBiasRate": 0,
            "deterministicLimit": 3
        }))
        .unwrap();
        assert_eq!(record.consecutive_failures, 0);
        assert!(record.category_outcomes.is_empty());
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let result = serde_json::from_value::<CategoryRecord>(json!({
            "label": "Cursed",
            "weight": -1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_back_to_camel_case() {
        let class =
            ProbabilityClass::new("Rare", 10.0, 1.0, 5, vec![OutcomeCategory::new("Gem", 2)]);
        let value = serde_json::to_value(ClassRecord::from(&class)).unwrap();
        assert_eq!(value["classLabel"], "Rare");
        assert_eq!(value["consecutiveFailures"], 0);
        assert_eq!(value["categoryOutcomes"][0]["weight"], 2);
    }
}
