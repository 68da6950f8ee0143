//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A probability class failed input validation.
    #[error("invalid probability class {index} ({label}): {reason}")]
    InvalidClass {
        /// Position of the class in the evaluated list.
        index: usize,
        /// The class label, for diagnostics.
        label: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An infrastructure error (lock poisoning and the like).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
