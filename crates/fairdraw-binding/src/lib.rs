//! Fairdraw Binding — the JSON boundary around the evaluation engine.
//!
//! Callers hand in class records as JSON, get back the legacy result string
//! plus the records with updated failure counters. Input shape is checked
//! here; the engine assumes well-formed classes.

pub mod error;
pub mod handler;
pub mod protocol;
pub mod records;
pub mod request;
pub mod response;
pub mod telemetry;

pub use error::BindingError;
pub use handler::evaluate_json;
pub use protocol::{ClientMessage, ServerMessage, handle_message};
pub use response::EvaluationResponse;
