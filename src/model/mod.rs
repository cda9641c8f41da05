//! Pure data structures: orders, collaborator configuration and showcase data.

pub mod config;
pub mod order;
pub mod showcase;

pub use config::*;
pub use order::*;
