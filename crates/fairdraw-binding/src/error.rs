//! Fairdraw Binding — error types.

use fairdraw_core::error::DomainError;
use thiserror::Error;

/// Errors raised while marshalling requests into the engine.
#[derive(Debug, Error)]
pub enum BindingError {
    /// The class list was not a JSON array.
    #[error("Expected array of probability classes")]
    NotAnArray,

    /// A class record did not have the expected fields or types.
    #[error("malformed probability class at index {index}: {source}")]
    MalformedClass {
        /// Position of the record in the list.
        index: usize,
        /// The decoding failure.
        source: serde_json::Error,
    },

    /// A message was not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The engine rejected the decoded classes.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl BindingError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAnArray => "not_an_array",
            Self::MalformedClass { .. } => "malformed_class",
            Self::InvalidJson(_) => "invalid_json",
            Self::Domain(DomainError::InvalidClass { .. }) => "validation_error",
            Self::Domain(DomainError::Infrastructure(_)) => "infrastructure_error",
        }
    }
}
