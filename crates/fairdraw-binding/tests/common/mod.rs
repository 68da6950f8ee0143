//! Shared helpers for binding integration tests.
#![allow(dead_code)]

use chrono::TimeZone;
use fairdraw_engine::{EngineConfig, Evaluator, SharedEvaluator};
use fairdraw_test_support::{ConstantSource, FixedClock};
use serde_json::{Value, json};

/// Evaluator whose probability rolls fail for every class below 100%.
pub fn failing_evaluator() -> SharedEvaluator {
    SharedEvaluator::new(Evaluator::new(
        Box::new(ConstantSource::always_fail()),
        Box::new(ConstantSource(0)),
    ))
}

/// Production generators seeded explicitly.
pub fn seeded_evaluator(seed0: u64, seed1: u64) -> SharedEvaluator {
    let clock = FixedClock(chrono::Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
    let config = EngineConfig::default().with_seeds(seed0, seed1);
    SharedEvaluator::new(Evaluator::from_config(&config, &clock))
}

/// A three-tier loot table in the caller's wire format.
pub fn loot_table() -> Value {
    json!([
        {
            "classLabel": "Legendary",
            "initialProbability": 1.0,
            "incrementalBiasRate": 0.5,
            "consecutiveFailures": 0,
            "deterministicLimit": 5,
            "categoryOutcomes": [
                { "label": "Excalibur", "weight": 1 },
                { "label": "Mjolnir", "weight": 0 }
            ]
        },
        {
            "classLabel": "Rare",
            "initialProbability": 10.0,
            "incrementalBiasRate": 5.0,
            "consecutiveFailures": 0,
            "deterministicLimit": 20,
            "categoryOutcomes": [
                { "label": "Longbow", "weight": 3 },
                { "label": "Tower Shield", "weight": 3 }
            ]
        },
        {
            "classLabel": "Common",
            "initialProbability": 60.0,
            "incrementalBiasRate": 0.0,
            "consecutiveFailures": 0,
            "deterministicLimit": 10,
            "categoryOutcomes": [
                { "label": "Bread", "weight": 5 },
                { "label": "Rope", "weight": 1 }
            ]
        }
    ])
}
