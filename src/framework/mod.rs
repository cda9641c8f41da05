//! Generic actor framework for keyed, in-memory registries.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stored records implement
//! - [`ResourceActor`] - Generic actor that owns the records
//! - [`ResourceClient`] - Typed handle used to talk to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
