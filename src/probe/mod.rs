//! One-shot connectivity checks for the two external collaborators.
//!
//! Probes are read-only: they never touch the [`ConfigStore`](crate::config_store::ConfigStore)
//! and never retry. Every outcome, including a transport failure, is reported
//! as a [`ProbeResult`] rather than an error.

use crate::dispatch::http::read_body;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Default bound on a single probe call.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Health endpoint used to validate integration API keys.
pub const DEFAULT_INTEGRATION_HEALTH_URL: &str = "https://api.composio.dev/v1/health";

const TRIGGER_HINT: &str = "Make sure n8n is running and the workflow is activated";
const AUTH_HINT: &str = "Check your API key at https://app.composio.dev";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ProbeResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            hint: None,
        }
    }

    fn failed(message: String, hint: &str) -> Self {
        Self {
            success: false,
            message,
            hint: Some(hint.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct ConnectionProbe {
    client: Client,
    timeout: Duration,
    integration_health_url: String,
}

impl ConnectionProbe {
    pub fn new(timeout: Duration, integration_health_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            timeout,
            integration_health_url: integration_health_url.into(),
        })
    }

    fn describe(&self, error: reqwest::Error) -> String {
        if error.is_timeout() {
            format!("timeout of {}ms exceeded", self.timeout.as_millis())
        } else {
            error.to_string()
        }
    }

    /// Posts a synthetic test payload to the workflow trigger.
    ///
    /// Any 2xx answer counts as reachable; the body is ignored.
    #[instrument(skip(self))]
    pub async fn probe_workflow_trigger(&self, webhook_url: &str) -> ProbeResult {
        let outcome = self
            .client
            .post(webhook_url)
            .json(&json!({ "test": true, "message": "Connection test from backend" }))
            .send()
            .await;

        let failure = match outcome {
            Ok(response) if response.status().is_success() => {
                info!("Workflow trigger reachable");
                return ProbeResult::ok("n8n connection successful");
            }
            Ok(response) => format!("Request failed with status code {}", response.status().as_u16()),
            Err(e) => self.describe(e),
        };

        warn!(error = %failure, "Workflow trigger probe failed");
        ProbeResult::failed(format!("Cannot connect to n8n: {failure}"), TRIGGER_HINT)
    }

    /// Calls the integration health endpoint with `api_key` as a bearer credential.
    #[instrument(skip(self, api_key))]
    pub async fn probe_integration_auth(&self, api_key: &str) -> ProbeResult {
        let outcome = self
            .client
            .get(&self.integration_health_url)
            .bearer_auth(api_key)
            .send()
            .await;

        let failure = match outcome {
            Ok(response) if response.status().is_success() => {
                info!("Integration API key accepted");
                return ProbeResult::ok("Composio API key is valid");
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let body = read_body(response).await.ok().flatten();
                body_message(body.as_ref())
                    .unwrap_or_else(|| format!("Request failed with status code {status}"))
            }
            Err(e) => self.describe(e),
        };

        warn!(error = %failure, "Integration auth probe failed");
        ProbeResult::failed(format!("Invalid Composio API key: {failure}"), AUTH_HINT)
    }
}

fn body_message(body: Option<&Value>) -> Option<String> {
    body?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
