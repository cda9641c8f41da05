//! Status transitions for the Order actor.
//!
//! These are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! inside the actor task, so a transition never interleaves with another write
//! to the same order.

use serde_json::Value;

/// Terminal transitions for a `processing` order.
///
/// Both variants carry the value stored as the order's `result`.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// The trigger accepted the order; carries its response body.
    Complete(Value),
    /// Dispatch did not happen or did not succeed; carries `{ "error": ... }`.
    Fail(Value),
}
