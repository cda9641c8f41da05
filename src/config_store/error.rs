//! Error types for the configuration store.

use thiserror::Error;

/// Errors raised when replacing the stored configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A required connection field is missing or empty.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
