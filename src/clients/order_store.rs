use crate::model::Order;
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;

/// Storage seam for submitted orders.
///
/// The workflow and the HTTP layer only see this trait. [`OrderClient`](super::OrderClient)
/// implements it on top of the in-memory registry actor; a durable backend would
/// implement the same four methods.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert the order, or overwrite the one stored under the same id.
    async fn put(&self, order: Order) -> Result<(), OrderError>;

    /// Fetch an order by id.
    async fn get(&self, order_id: &str) -> Result<Option<Order>, OrderError>;

    /// Every stored order, in first-insertion order.
    async fn list_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Apply a terminal transition and return the updated record.
    async fn settle(&self, order_id: &str, action: OrderAction) -> Result<Order, OrderError>;
}
