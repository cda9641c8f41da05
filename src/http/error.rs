use crate::config_store::ConfigError;
use crate::order_actor::{OrderError, SYSTEM_NOT_CONFIGURED};
use crate::workflow::{NOT_CONFIGURED_HINT, NOT_CONFIGURED_MESSAGE};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Http {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Http {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "success": false, "message": message.into() }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Http { status, message: text } => message_response(status, text),
            ApiError::Config(ConfigError::ValidationError(text)) => {
                message_response(StatusCode::BAD_REQUEST, text)
            }
            ApiError::Order(err) => match err {
                OrderError::ValidationError(text) => message_response(StatusCode::BAD_REQUEST, text),
                OrderError::NotFound(_) => message_response(StatusCode::NOT_FOUND, "Order not found"),
                OrderError::NotConfigured { order_id } => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "success": false,
                        "error": SYSTEM_NOT_CONFIGURED,
                        "message": NOT_CONFIGURED_MESSAGE,
                        "hint": NOT_CONFIGURED_HINT,
                        "orderId": order_id,
                    })),
                )
                    .into_response(),
                OrderError::DispatchFailed { order_id, message } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": message, "orderId": order_id })),
                )
                    .into_response(),
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": other.to_string() })),
                )
                    .into_response(),
            },
        }
    }
}
