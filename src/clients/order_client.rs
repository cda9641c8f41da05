use crate::clients::OrderStore;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::Order;
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order registry actor.
///
/// Status transitions run inside the actor (see `Order::handle_action`), so the
/// "terminal exactly once" rule holds even with concurrent handlers.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Map framework errors to order errors, unwrapping entity errors raised by
    /// the Order itself.
    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    async fn put(&self, order: Order) -> Result<(), OrderError> {
        debug!(status = ?order.status, "Sending put");
        self.inner.put(order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn get(&self, order_id: &str) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .get(order_id.to_string())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    #[instrument(skip(self, action))]
    async fn settle(&self, order_id: &str, action: OrderAction) -> Result<Order, OrderError> {
        debug!(?action, "Sending transition");
        self.inner
            .perform_action(order_id.to_string(), action)
            .await
            .map_err(Self::map_error)
    }
}
