//! Service metadata, fixed dashboard data and inbound webhook acknowledgements.

use crate::http::{ApiError, AppState};
use crate::model::showcase;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Map, Value};
use tracing::info;

pub const SERVICE_NAME: &str = "VIP Order Gateway";

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "service": SERVICE_NAME,
    }))
}

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("{SERVICE_NAME} API"),
        "version": env!("CARGO_PKG_VERSION"),
        "demoMode": state.demo_mode,
        "endpoints": {
            "health": "/health",
            "orders": "/api/orders",
            "config": "/api/config",
            "inventory": "/api/inventory",
            "workflow": "/api/workflow",
            "webhook": "/api/webhook",
        },
    }))
}

pub async fn inventory() -> Json<Value> {
    let warehouses: Map<String, Value> = showcase::warehouses()
        .into_iter()
        .map(|(key, warehouse)| (key.to_string(), json!(warehouse)))
        .collect();
    Json(json!({
        "success": true,
        "timestamp": Utc::now(),
        "warehouses": warehouses,
    }))
}

pub async fn warehouse_inventory(Path(code): Path<String>) -> Result<Json<Value>, ApiError> {
    let warehouse = showcase::warehouse(&code).ok_or_else(|| ApiError::not_found("Warehouse not found"))?;
    Ok(Json(json!({
        "success": true,
        "warehouse": warehouse,
        "timestamp": Utc::now(),
    })))
}

pub async fn workflow_status() -> Json<Value> {
    Json(json!({ "success": true, "status": showcase::workflow_status() }))
}

pub async fn workflow_stats() -> Json<Value> {
    Json(json!({ "success": true, "stats": showcase::workflow_stats() }))
}

fn acknowledge(message: &str) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": message,
        "timestamp": Utc::now(),
    }))
}

pub async fn workflow_webhook(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    info!(payload = %body, "Received workflow webhook");
    Ok(acknowledge("Webhook received successfully"))
}

pub async fn integration_webhook(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    info!(payload = %body, "Received integration webhook");
    Ok(acknowledge("Composio webhook received successfully"))
}
