//! Runtime orchestration: starting and stopping the registry actor, and
//! initialising tracing.
//!
//! # Main Components
//!
//! - [`OrderSystem`] - owns the order registry actor task and its client
//! - [`setup_tracing`] - installs the global tracing subscriber

pub mod order_system;
pub mod tracing;

pub use self::order_system::*;
pub use self::tracing::*;
