//! Error types for the Order actor and the submission workflow.

use thiserror::Error;

/// Error kind reported when an order arrives before the system is configured.
pub const SYSTEM_NOT_CONFIGURED: &str = "SYSTEM_NOT_CONFIGURED";

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order request is missing required fields or carries invalid values.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The order was recorded as failed because no workflow trigger is configured.
    #[error("System not configured: order {order_id} was not dispatched")]
    NotConfigured { order_id: String },

    /// The workflow trigger call failed; the order was recorded as failed.
    #[error("{message}")]
    DispatchFailed { order_id: String, message: String },

    /// A terminal order was asked to change status again.
    #[error("Order already finalized: {0}")]
    AlreadyFinalized(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Stable machine-readable kind, used in response bodies and stored results.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::NotFound(_) => "NOT_FOUND",
            OrderError::ValidationError(_) => "VALIDATION_ERROR",
            OrderError::NotConfigured { .. } => SYSTEM_NOT_CONFIGURED,
            OrderError::DispatchFailed { .. } => "UPSTREAM_DISPATCH_ERROR",
            OrderError::AlreadyFinalized(_) => "ALREADY_FINALIZED",
            OrderError::ActorCommunicationError(_) => "INTERNAL_ERROR",
        }
    }
}
