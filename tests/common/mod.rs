#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;
use vip_order_gateway::clients::OrderStore;
use vip_order_gateway::config_store::ConfigStore;
use vip_order_gateway::dispatch::{HttpDispatcher, OrderDispatcher};
use vip_order_gateway::http::{build_router, AppState};
use vip_order_gateway::lifecycle::OrderSystem;
use vip_order_gateway::probe::ConnectionProbe;
use vip_order_gateway::workflow::OrderWorkflow;

pub struct TestApp {
    pub router: Router,
    pub config: ConfigStore,
    pub orders: Arc<dyn OrderStore>,
    pub system: OrderSystem,
}

/// Builds the full router over a fresh registry and an empty config store.
pub fn test_app_with(dispatcher: Arc<dyn OrderDispatcher>, demo_mode: bool, health_url: &str) -> TestApp {
    let system = OrderSystem::new();
    let orders: Arc<dyn OrderStore> = Arc::new(system.order_client.clone());
    let config = ConfigStore::new();
    let state = AppState {
        workflow: OrderWorkflow::new(config.clone(), orders.clone(), dispatcher),
        orders: orders.clone(),
        config: config.clone(),
        probe: ConnectionProbe::new(Duration::from_secs(2), health_url).unwrap(),
        demo_mode,
    };
    TestApp {
        router: build_router(state, "http://localhost:3000"),
        config,
        orders,
        system,
    }
}

pub fn test_app() -> TestApp {
    let dispatcher = Arc::new(HttpDispatcher::new(Duration::from_secs(2)).unwrap());
    test_app_with(dispatcher, false, "http://127.0.0.1:1/v1/health")
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Sends a body verbatim with the given content type; returns the status only.
pub async fn send_raw(router: &Router, uri: &str, content_type: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap().status()
}

pub fn config_body(webhook_url: &str) -> Value {
    serde_json::json!({
        "workflowTrigger": { "webhookUrl": webhook_url, "baseUrl": "http://x" },
        "integrationAuth": { "apiKey": "k" }
    })
}

pub fn example_order() -> Value {
    serde_json::json!({
        "customerId": "CUST-001",
        "items": [{ "sku": "PROD-001", "quantity": 2, "price": 99.99 }],
        "totalAmount": 199.98
    })
}
