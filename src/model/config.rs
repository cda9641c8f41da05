//! Connection settings for the two external collaborators.
//!
//! [`SystemConfiguration`] is the stored value held by
//! [`ConfigStore`](crate::config_store::ConfigStore). The request side is
//! [`ConfigUpdate`], and the read side is split into [`ConfigStatus`] and
//! [`RedactedConfig`] so raw API keys never leave the process.

use crate::config_store::ConfigError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL assumed for the integration API when none is given.
pub const DEFAULT_INTEGRATION_BASE_URL: &str = "https://api.composio.dev";

/// Settings for the workflow trigger (the n8n webhook).
#[derive(Clone, Default, PartialEq)]
pub struct WorkflowTriggerSettings {
    pub webhook_url: String,
    pub base_url: String,
    pub api_key: Option<String>,
}

// Keys are redacted from Debug so the settings can be logged.
impl fmt::Debug for WorkflowTriggerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowTriggerSettings")
            .field("webhook_url", &self.webhook_url)
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

/// Credentials for the third-party integration API (Composio).
#[derive(Clone, Default, PartialEq)]
pub struct IntegrationAuthSettings {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for IntegrationAuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationAuthSettings")
            .field("base_url", &self.base_url)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

/// The process-wide configuration value.
///
/// `configured == true` implies the trigger's webhook and base URLs and the
/// integration API key are all non-empty. The only way to reach that state is
/// [`ConfigUpdate::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemConfiguration {
    pub configured: bool,
    pub workflow_trigger: WorkflowTriggerSettings,
    pub integration_auth: IntegrationAuthSettings,
    pub configured_at: Option<DateTime<Utc>>,
}

impl SystemConfiguration {
    pub fn has_workflow_trigger(&self) -> bool {
        !self.workflow_trigger.webhook_url.is_empty() && !self.workflow_trigger.base_url.is_empty()
    }

    pub fn has_integration_auth(&self) -> bool {
        !self.integration_auth.api_key.is_empty()
    }

    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            configured: self.configured,
            has_workflow_trigger: self.has_workflow_trigger(),
            has_integration_auth: self.has_integration_auth(),
            configured_at: self.configured_at,
        }
    }

    pub fn redacted(&self) -> RedactedConfig {
        let integration_base_url = if self.integration_auth.base_url.is_empty() {
            DEFAULT_INTEGRATION_BASE_URL.to_string()
        } else {
            self.integration_auth.base_url.clone()
        };
        RedactedConfig {
            workflow_trigger: RedactedWorkflowTrigger {
                webhook_url: self.workflow_trigger.webhook_url.clone(),
                base_url: self.workflow_trigger.base_url.clone(),
                has_api_key: self.workflow_trigger.api_key.is_some(),
            },
            integration_auth: RedactedIntegrationAuth {
                base_url: integration_base_url,
                has_api_key: self.has_integration_auth(),
            },
            configured: self.configured,
        }
    }
}

/// Readiness summary returned by `GET /api/config/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    pub configured: bool,
    pub has_workflow_trigger: bool,
    pub has_integration_auth: bool,
    pub configured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedWorkflowTrigger {
    pub webhook_url: String,
    pub base_url: String,
    pub has_api_key: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedIntegrationAuth {
    pub base_url: String,
    pub has_api_key: bool,
}

/// Configuration with every secret replaced by a presence flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedConfig {
    pub workflow_trigger: RedactedWorkflowTrigger,
    pub integration_auth: RedactedIntegrationAuth,
    pub configured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTriggerInput {
    pub webhook_url: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationAuthInput {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Body of `POST /api/config`. The dashboard's older `n8n` / `composio` keys
/// are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    #[serde(alias = "n8n")]
    pub workflow_trigger: Option<WorkflowTriggerInput>,
    #[serde(alias = "composio")]
    pub integration_auth: Option<IntegrationAuthInput>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ConfigUpdate {
    /// Checks the required fields and produces the two settings sections.
    ///
    /// An empty optional trigger API key is stored as `None`; a missing
    /// integration base URL falls back to [`DEFAULT_INTEGRATION_BASE_URL`].
    pub fn validate(self) -> Result<(WorkflowTriggerSettings, IntegrationAuthSettings), ConfigError> {
        let trigger = self.workflow_trigger.unwrap_or_default();
        let (webhook_url, base_url) =
            match (non_empty(trigger.webhook_url), non_empty(trigger.base_url)) {
                (Some(webhook_url), Some(base_url)) => (webhook_url, base_url),
                _ => {
                    return Err(ConfigError::ValidationError(
                        "workflow trigger webhook URL and base URL are required".to_string(),
                    ))
                }
            };

        let auth = self.integration_auth.unwrap_or_default();
        let api_key = non_empty(auth.api_key).ok_or_else(|| {
            ConfigError::ValidationError("integration API key is required".to_string())
        })?;

        Ok((
            WorkflowTriggerSettings {
                webhook_url,
                base_url,
                api_key: non_empty(trigger.api_key),
            },
            IntegrationAuthSettings {
                api_key,
                base_url: non_empty(auth.base_url)
                    .unwrap_or_else(|| DEFAULT_INTEGRATION_BASE_URL.to_string()),
            },
        ))
    }
}
