//! Trial message protocol.
//!
//! Clients send `{"type": "runTrial", "classes": [...]}` and receive either
//! `{"type": "trialResult", "result": {...}}` or
//! `{"type": "error", "error": "...", "code": "..."}`. Transport is the
//! caller's concern; this module only maps message text to replies.

use fairdraw_engine::SharedEvaluator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::BindingError;
use crate::handler::evaluate_json;
use crate::response::EvaluationResponse;

/// The only message type that gets a reply.
const RUN_TRIAL: &str = "runTrial";

/// Messages accepted from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Evaluate one trial over the supplied classes.
    RunTrial {
        /// The class list; anything but an array is rejected at evaluation.
        #[serde(default)]
        classes: Value,
    },
    /// Any other message type; ignored.
    #[serde(other)]
    Unsupported,
}

/// Replies sent back to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// A trial completed.
    TrialResult {
        /// The evaluation response.
        result: EvaluationResponse,
    },
    /// The message could not be handled.
    Error {
        /// Human-readable message.
        error: String,
        /// Machine-readable code.
        code: String,
    },
}

impl From<BindingError> for ServerMessage {
    fn from(err: BindingError) -> Self {
        Self::Error {
            code: err.code().to_owned(),
            error: err.to_string(),
        }
    }
}

/// Handles one message of raw text.
///
/// Returns `None` for any valid JSON that is not a `runTrial` message,
/// including objects without a string `type` and non-object values. Every
/// failure is reported as `ServerMessage::Error` rather than returned.
pub fn handle_message(evaluator: &SharedEvaluator, text: &str) -> Option<ServerMessage> {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "rejected client message");
            return Some(BindingError::InvalidJson(e).into());
        }
    };

    if value.get("type").and_then(Value::as_str) != Some(RUN_TRIAL) {
        debug!("ignoring message without a runTrial type");
        return None;
    }

    let message = match ClientMessage::deserialize(value) {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, "rejected client message");
            return Some(BindingError::InvalidJson(e).into());
        }
    };

    match message {
        ClientMessage::RunTrial { classes } => Some(match evaluate_json(evaluator, &classes) {
            Ok(result) => ServerMessage::TrialResult { result },
            Err(err) => {
                warn!(code = err.code(), error = %err, "trial failed");
                err.into()
            }
        }),
        ClientMessage::Unsupported => {
            debug!("ignoring unsupported message type");
            None
        }
    }
}
