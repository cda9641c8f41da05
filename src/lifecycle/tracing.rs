//! # Observability
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); log lines
//! carry `entity_type`, `order_id` and span names instead.
//!
//! ```bash
//! # Defaults to vip_order_gateway=info,tower_http=info
//! cargo run
//!
//! # Full payloads and per-request actor traffic
//! RUST_LOG=vip_order_gateway=debug,tower_http=debug cargo run
//! ```
//!
//! API keys never reach the logs: the settings types redact them in `Debug`,
//! and the probe spans skip the key argument.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "vip_order_gateway=info,tower_http=info";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
