use crate::http::{ApiError, AppState};
use crate::model::ConfigUpdate;
use crate::probe::ProbeResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerProbeRequest {
    webhook_url: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProbeRequest {
    api_key: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub async fn config_status(State(state): State<AppState>) -> Json<Value> {
    let status = state.config.status().await;
    Json(json!({
        "success": true,
        "configured": status.configured,
        "hasWorkflowTrigger": status.has_workflow_trigger,
        "hasIntegrationAuth": status.has_integration_auth,
        "configuredAt": status.configured_at,
    }))
}

pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "success": true, "config": state.config.redacted().await }))
}

pub async fn update_config(
    State(state): State<AppState>,
    payload: Result<Json<ConfigUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(update) = payload?;
    let status = state.config.update(update).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Configuration updated successfully",
        "configured": status.configured,
        "configuredAt": status.configured_at,
    })))
}

pub async fn reset_config(State(state): State<AppState>) -> Json<Value> {
    state.config.reset().await;
    Json(json!({ "success": true, "message": "Configuration reset successfully" }))
}

pub async fn probe_trigger(
    State(state): State<AppState>,
    payload: Result<Json<TriggerProbeRequest>, JsonRejection>,
) -> Result<Json<ProbeResult>, ApiError> {
    let Json(request) = payload?;
    let webhook_url =
        required(request.webhook_url).ok_or_else(|| ApiError::bad_request("Webhook URL is required"))?;
    Ok(Json(state.probe.probe_workflow_trigger(&webhook_url).await))
}

pub async fn probe_auth(
    State(state): State<AppState>,
    payload: Result<Json<AuthProbeRequest>, JsonRejection>,
) -> Result<Json<ProbeResult>, ApiError> {
    let Json(request) = payload?;
    let api_key = required(request.api_key).ok_or_else(|| ApiError::bad_request("API key is required"))?;
    Ok(Json(state.probe.probe_integration_auth(&api_key).await))
}
