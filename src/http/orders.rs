use crate::http::{ApiError, AppState};
use crate::model::OrderRequest;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

pub async fn submit_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let submission = request.validate()?;
    debug!(?submission, "Order request accepted");

    let receipt = state.workflow.submit(submission).await?;
    let message = if state.demo_mode {
        "Order submitted for processing (Demo Mode)"
    } else {
        "Order submitted for processing"
    };
    Ok(Json(json!({
        "success": true,
        "orderId": receipt.order_id,
        "message": message,
        "workflowResult": receipt.workflow_result,
    })))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let order = state
        .orders
        .get(&order_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order not found"))?;
    Ok(Json(json!({ "success": true, "order": order })))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let orders = state.orders.list_all().await?;
    Ok(Json(json!({
        "success": true,
        "count": orders.len(),
        "orders": orders,
    })))
}
