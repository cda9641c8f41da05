//! Dispatch strategies for sending an order to the workflow trigger.
//!
//! [`OrderDispatcher`] is the seam the submission workflow calls while an order
//! is `dispatching`:
//!
//! - [`HttpDispatcher`] posts the order to the configured webhook.
//! - [`SimulatedDispatcher`] fabricates a completed result (demo mode).
//!
//! Each call is a single attempt. There is no retry and no backoff.

pub mod error;
pub mod http;
pub mod simulated;

pub use error::*;
pub use http::*;
pub use simulated::*;

use crate::model::{Order, WorkflowTriggerSettings};
use async_trait::async_trait;
use serde_json::Value;

/// Where and how to reach the workflow trigger.
#[derive(Clone, PartialEq)]
pub struct DispatchTarget {
    pub webhook_url: String,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for DispatchTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTarget")
            .field("webhook_url", &self.webhook_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl From<&WorkflowTriggerSettings> for DispatchTarget {
    fn from(settings: &WorkflowTriggerSettings) -> Self {
        Self {
            webhook_url: settings.webhook_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

#[async_trait]
pub trait OrderDispatcher: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Sends `order` to `target` and returns the trigger's response body.
    async fn dispatch(&self, target: &DispatchTarget, order: &Order) -> Result<Value, DispatchError>;
}
