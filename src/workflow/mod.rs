//! # Order Submission Workflow
//!
//! Takes a validated [`OrderSubmission`] through
//! `received → dispatching → completed | failed`:
//!
//! 1. **received**: the order is stored as `processing`.
//! 2. **dispatching**: the configuration is snapshotted. An unconfigured system
//!    fails the order with `SYSTEM_NOT_CONFIGURED` without any outbound call.
//! 3. The order is handed to the [`OrderDispatcher`] exactly once.
//! 4. **completed** / **failed**: the outcome is written back through
//!    [`OrderStore::settle`].
//!
//! Every path that gets past step 1 ends in a terminal status, so an order is
//! never left `processing` after `submit` returns.

use crate::clients::OrderStore;
use crate::config_store::ConfigStore;
use crate::dispatch::{DispatchError, DispatchTarget, OrderDispatcher};
use crate::model::{Order, OrderSubmission};
use crate::order_actor::{OrderAction, OrderError, SYSTEM_NOT_CONFIGURED};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Explanation stored on orders rejected for missing configuration.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "System is not configured. Save the workflow trigger and integration settings first.";

/// Remediation returned to the caller alongside `SYSTEM_NOT_CONFIGURED`.
pub const NOT_CONFIGURED_HINT: &str =
    "Configure the system on the settings page, then resubmit the order";

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub order_id: String,
    pub workflow_result: Value,
}

#[derive(Clone)]
pub struct OrderWorkflow {
    config: ConfigStore,
    store: Arc<dyn OrderStore>,
    dispatcher: Arc<dyn OrderDispatcher>,
}

impl OrderWorkflow {
    pub fn new(
        config: ConfigStore,
        store: Arc<dyn OrderStore>,
        dispatcher: Arc<dyn OrderDispatcher>,
    ) -> Self {
        Self {
            config,
            store,
            dispatcher,
        }
    }

    #[instrument(name = "submit_order", skip(self, submission))]
    pub async fn submit(&self, submission: OrderSubmission) -> Result<SubmissionReceipt, OrderError> {
        let order = Order::received(submission, Utc::now());
        let order_id = order.order_id.clone();
        self.store.put(order.clone()).await?;
        info!(%order_id, "Order received");

        let config = self.config.snapshot().await;
        if !config.configured {
            warn!(%order_id, "Rejecting order: system not configured");
            self.store
                .settle(
                    &order_id,
                    OrderAction::Fail(json!({
                        "error": SYSTEM_NOT_CONFIGURED,
                        "message": NOT_CONFIGURED_MESSAGE,
                    })),
                )
                .await?;
            return Err(OrderError::NotConfigured { order_id });
        }

        let target = DispatchTarget::from(&config.workflow_trigger);
        match self.dispatcher.dispatch(&target, &order).await {
            Ok(response) => {
                self.store
                    .settle(&order_id, OrderAction::Complete(response.clone()))
                    .await?;
                info!(%order_id, dispatcher = self.dispatcher.name(), "Order completed");
                Ok(SubmissionReceipt {
                    order_id,
                    workflow_result: response,
                })
            }
            Err(error) => {
                warn!(%order_id, %error, "Dispatch failed");
                self.store
                    .settle(&order_id, OrderAction::Fail(failure_result(&error)))
                    .await?;
                Err(OrderError::DispatchFailed {
                    order_id,
                    message: error.to_string(),
                })
            }
        }
    }
}

fn failure_result(error: &DispatchError) -> Value {
    let mut result = Map::new();
    result.insert("error".to_string(), Value::String(error.to_string()));
    if let Some(details) = error.details() {
        result.insert("details".to_string(), details.clone());
    }
    Value::Object(result)
}
