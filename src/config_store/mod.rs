//! Process-wide connection settings for the workflow trigger and the
//! integration API.
//!
//! [`ConfigStore`] is constructed once at startup and cloned into every
//! component that needs it. Reads take a snapshot; `update` and `reset` replace
//! the whole value under a single write lock, so a half-written configuration is
//! never observable.

pub mod error;

pub use error::*;

use crate::model::{ConfigStatus, ConfigUpdate, RedactedConfig, SystemConfiguration};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

#[derive(Clone, Default)]
pub struct ConfigStore {
    inner: Arc<RwLock<SystemConfiguration>>,
}

impl ConfigStore {
    /// An empty, unconfigured store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Readiness summary. Pure read.
    pub async fn status(&self) -> ConfigStatus {
        self.inner.read().await.status()
    }

    /// The stored configuration with API keys replaced by presence flags.
    pub async fn redacted(&self) -> RedactedConfig {
        self.inner.read().await.redacted()
    }

    /// Full copy of the stored value, secrets included. For in-process callers
    /// (the submission workflow) only; never serialize it.
    pub async fn snapshot(&self) -> SystemConfiguration {
        self.inner.read().await.clone()
    }

    /// Validates `candidate` and, on success, replaces the stored configuration
    /// wholesale. Fields absent from `candidate` are not carried over.
    ///
    /// # Errors
    /// [`ConfigError::ValidationError`] when the trigger webhook URL, trigger base
    /// URL or integration API key is empty. The stored value is left untouched.
    #[instrument(skip(self, candidate))]
    pub async fn update(&self, candidate: ConfigUpdate) -> Result<ConfigStatus, ConfigError> {
        let (workflow_trigger, integration_auth) = candidate.validate().map_err(|e| {
            warn!(error = %e, "Rejected configuration update");
            e
        })?;

        let next = SystemConfiguration {
            configured: true,
            workflow_trigger,
            integration_auth,
            configured_at: Some(Utc::now()),
        };
        let status = next.status();

        *self.inner.write().await = next;
        info!(configured_at = ?status.configured_at, "Configuration updated");
        Ok(status)
    }

    /// Restores the initial unconfigured value and drops every stored secret.
    #[instrument(skip(self))]
    pub async fn reset(&self) {
        *self.inner.write().await = SystemConfiguration::default();
        info!("Configuration reset");
    }
}
