use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use vip_order_gateway::clients::OrderStore;
use vip_order_gateway::config_store::ConfigStore;
use vip_order_gateway::dispatch::{HttpDispatcher, OrderDispatcher, SimulatedDispatcher};
use vip_order_gateway::http::{build_router, AppState};
use vip_order_gateway::lifecycle::{setup_tracing, OrderSystem};
use vip_order_gateway::probe::ConnectionProbe;
use vip_order_gateway::settings::Settings;
use vip_order_gateway::workflow::OrderWorkflow;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let settings = Settings::parse();

    let system = OrderSystem::new();
    let orders: Arc<dyn OrderStore> = Arc::new(system.order_client.clone());

    let config = ConfigStore::new();
    if let Some(bootstrap) = settings.bootstrap_config() {
        match config.update(bootstrap).await {
            Ok(_) => info!("Configuration loaded from environment"),
            Err(e) => warn!(error = %e, "Ignoring incomplete environment configuration"),
        }
    }

    let dispatcher: Arc<dyn OrderDispatcher> = if settings.demo_mode {
        Arc::new(SimulatedDispatcher::new(settings.demo_delay()))
    } else {
        Arc::new(HttpDispatcher::new(settings.dispatch_timeout()).context("building HTTP dispatcher")?)
    };
    let probe = ConnectionProbe::new(settings.probe_timeout(), settings.integration_health_url.clone())
        .context("building connection probe")?;

    let state = AppState {
        workflow: OrderWorkflow::new(config.clone(), orders.clone(), dispatcher),
        orders,
        config,
        probe,
        demo_mode: settings.demo_mode,
    };
    let app = build_router(state, &settings.cors_origin);

    let listener = tokio::net::TcpListener::bind(settings.listen_addr()).await?;
    info!(
        demo_mode = settings.demo_mode,
        "vip-order-gateway listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, initiating graceful shutdown");
}
