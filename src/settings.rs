//! Process settings, read from the command line with environment fallbacks.

use crate::dispatch::DEFAULT_DISPATCH_TIMEOUT;
use crate::model::{ConfigUpdate, IntegrationAuthInput, WorkflowTriggerInput};
use crate::probe::{DEFAULT_INTEGRATION_HEALTH_URL, DEFAULT_PROBE_TIMEOUT};
use clap::Parser;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Clone, Parser)]
#[command(name = "vip-order-gateway", version, about = "VIP order gateway REST service")]
pub struct Settings {
    /// Socket address to bind, e.g. 127.0.0.1:5000
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,
    /// Overrides the port of `--listen`.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
    /// Origin allowed by CORS. `*` allows any.
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,
    /// Replace the HTTP dispatcher with a simulated one.
    #[arg(long, env = "DEMO_MODE", default_value_t = false)]
    pub demo_mode: bool,
    /// Artificial latency of the simulated dispatcher.
    #[arg(long, env = "DEMO_DELAY_MS", default_value_t = 2000)]
    pub demo_delay_ms: u64,
    #[arg(long, env = "DISPATCH_TIMEOUT_SECS", default_value_t = DEFAULT_DISPATCH_TIMEOUT.as_secs())]
    pub dispatch_timeout_secs: u64,
    #[arg(long, env = "PROBE_TIMEOUT_SECS", default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs())]
    pub probe_timeout_secs: u64,
    /// Endpoint used to validate integration API keys.
    #[arg(long, env = "INTEGRATION_HEALTH_URL", default_value = DEFAULT_INTEGRATION_HEALTH_URL)]
    pub integration_health_url: String,

    /// Initial workflow trigger webhook URL.
    #[arg(long, env = "N8N_WEBHOOK_URL")]
    pub trigger_webhook_url: Option<String>,
    #[arg(long, env = "N8N_BASE_URL")]
    pub trigger_base_url: Option<String>,
    #[arg(long, env = "N8N_API_KEY", hide_env_values = true)]
    pub trigger_api_key: Option<String>,
    /// Initial integration API key.
    #[arg(long, env = "COMPOSIO_API_KEY", hide_env_values = true)]
    pub integration_api_key: Option<String>,
    #[arg(long, env = "COMPOSIO_BASE_URL")]
    pub integration_base_url: Option<String>,
}

// API keys are reported as presence flags only.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("listen", &self.listen)
            .field("port", &self.port)
            .field("cors_origin", &self.cors_origin)
            .field("demo_mode", &self.demo_mode)
            .field("demo_delay_ms", &self.demo_delay_ms)
            .field("dispatch_timeout_secs", &self.dispatch_timeout_secs)
            .field("probe_timeout_secs", &self.probe_timeout_secs)
            .field("integration_health_url", &self.integration_health_url)
            .field("trigger_webhook_url", &self.trigger_webhook_url)
            .field("trigger_base_url", &self.trigger_base_url)
            .field("has_trigger_api_key", &self.trigger_api_key.is_some())
            .field("has_integration_api_key", &self.integration_api_key.is_some())
            .field("integration_base_url", &self.integration_base_url)
            .finish()
    }
}

impl Settings {
    pub fn listen_addr(&self) -> SocketAddr {
        let mut addr = self.listen;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        addr
    }

    pub fn dispatch_timeout(&self) -> Duration {
        Duration::from_secs(self.dispatch_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn demo_delay(&self) -> Duration {
        Duration::from_millis(self.demo_delay_ms)
    }

    /// Startup configuration assembled from the trigger and integration
    /// settings, or `None` when none of them were given.
    pub fn bootstrap_config(&self) -> Option<ConfigUpdate> {
        let any_set = [
            &self.trigger_webhook_url,
            &self.trigger_base_url,
            &self.trigger_api_key,
            &self.integration_api_key,
            &self.integration_base_url,
        ]
        .iter()
        .any(|v| v.is_some());
        if !any_set {
            return None;
        }

        Some(ConfigUpdate {
            workflow_trigger: Some(WorkflowTriggerInput {
                webhook_url: self.trigger_webhook_url.clone(),
                base_url: self.trigger_base_url.clone(),
                api_key: self.trigger_api_key.clone(),
            }),
            integration_auth: Some(IntegrationAuthInput {
                api_key: self.integration_api_key.clone(),
                base_url: self.integration_base_url.clone(),
            }),
        })
    }
}
