//! Error types for workflow-trigger dispatch.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Why a dispatch to the workflow trigger failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// No response arrived within the dispatch timeout.
    #[error("Workflow trigger timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// Connection, TLS or protocol failure before a response arrived.
    #[error("{0}")]
    Transport(String),

    /// The trigger answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Option<Value> },
}

impl DispatchError {
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            DispatchError::Timeout(timeout)
        } else {
            DispatchError::Transport(error.to_string())
        }
    }

    /// Response body returned alongside an error status, if any.
    pub fn details(&self) -> Option<&Value> {
        match self {
            DispatchError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
