//! # HTTP Surface
//!
//! Axum router exposing orders, configuration, probes and the dashboard data.
//! Handlers are thin: they parse the body, call into the workflow or a store,
//! and let [`ApiError`] pick the status code.

pub mod config;
pub mod error;
pub mod orders;
pub mod showcase;

pub use error::*;

use crate::clients::OrderStore;
use crate::config_store::ConfigStore;
use crate::probe::ConnectionProbe;
use crate::workflow::OrderWorkflow;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared handler state. Every field is a cheap clone over shared internals.
#[derive(Clone)]
pub struct AppState {
    pub workflow: OrderWorkflow,
    pub orders: Arc<dyn OrderStore>,
    pub config: ConfigStore,
    pub probe: ConnectionProbe,
    pub demo_mode: bool,
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin.parse::<HeaderValue>() {
        Ok(value) if origin != "*" => layer.allow_origin(value),
        Ok(_) => layer.allow_origin(Any),
        Err(_) => {
            warn!(%origin, "Unusable CORS origin, allowing any");
            layer.allow_origin(Any)
        }
    }
}

pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let api_routes = Router::new()
        // Orders
        .route("/orders", get(orders::list_orders).post(orders::submit_order))
        .route("/orders/:order_id", get(orders::get_order))
        // Configuration
        .route("/config", get(config::get_config).post(config::update_config))
        .route("/config/status", get(config::config_status))
        .route("/config/reset", post(config::reset_config))
        .route("/config/test/trigger", post(config::probe_trigger))
        .route("/config/test/auth", post(config::probe_auth))
        // Dashboard data
        .route("/inventory", get(showcase::inventory))
        .route("/inventory/:warehouse", get(showcase::warehouse_inventory))
        .route("/workflow/status", get(showcase::workflow_status))
        .route("/workflow/stats", get(showcase::workflow_stats))
        // Inbound webhooks
        .route("/webhook/n8n", post(showcase::workflow_webhook))
        .route("/webhook/composio", post(showcase::integration_webhook));

    Router::new()
        .route("/", get(showcase::root))
        .route("/health", get(showcase::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
        .with_state(state)
}
