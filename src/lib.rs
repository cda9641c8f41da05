//! # VIP Order Gateway
//!
//! A thin HTTP service that accepts VIP orders, forwards them to an external
//! workflow-automation webhook, and records the outcome.
//!
//! Whether an order may be dispatched at all is decided by the in-memory
//! [`ConfigStore`](config_store::ConfigStore): until both the workflow trigger
//! and the integration credentials are saved, submissions are recorded as
//! `failed` with `SYSTEM_NOT_CONFIGURED`.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` and its client. The order registry is one
//! instance of it.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`mock`](framework::mock).
//!
//! ### 2. The Registry ([`order_actor`], [`clients`])
//! [`Order`](model::Order) implements `ActorEntity`; terminal transitions run inside
//! the actor. [`OrderClient`](clients::OrderClient) exposes it behind the swappable
//! [`OrderStore`](clients::OrderStore) trait.
//!
//! ### 3. Configuration and probes ([`config_store`], [`probe`])
//! Process-wide connection settings with redacted read views, plus one-shot
//! reachability checks for both collaborators.
//!
//! ### 4. Submission ([`workflow`], [`dispatch`])
//! [`OrderWorkflow`](workflow::OrderWorkflow) gates on configuration and hands the
//! order to an [`OrderDispatcher`](dispatch::OrderDispatcher): real HTTP, or a
//! simulated one in demo mode.
//!
//! ### 5. The Edges ([`http`], [`settings`], [`lifecycle`])
//! Axum router, clap settings, actor startup/shutdown and tracing.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --demo-mode
//! ```

pub mod clients;
pub mod config_store;
pub mod dispatch;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod probe;
pub mod settings;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;
