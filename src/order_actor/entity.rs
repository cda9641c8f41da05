//! ActorEntity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> String {
        self.order_id.clone()
    }

    /// Moves a `processing` order to its terminal status.
    ///
    /// # Errors
    /// [`OrderError::AlreadyFinalized`] if the order is already `completed` or `failed`.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<Order, OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::AlreadyFinalized(self.order_id.clone()));
        }
        let (status, result) = match action {
            OrderAction::Complete(result) => (OrderStatus::Completed, result),
            OrderAction::Fail(result) => (OrderStatus::Failed, result),
        };
        self.status = status;
        self.result = Some(result);
        Ok(self.clone())
    }
}
