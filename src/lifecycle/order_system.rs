use crate::clients::OrderClient;
use tracing::{error, info};

/// Owns the running order registry actor.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let store: Arc<dyn OrderStore> = Arc::new(system.order_client.clone());
/// // ... serve requests ...
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for the Order registry actor
    pub order_client: OrderClient,

    /// Actor task handles, awaited on shutdown
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the registry actor. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (order_actor, order_client) = crate::order_actor::new();
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client,
            handles: vec![order_handle],
        }
    }

    /// Drops this system's client and waits for the actor to drain.
    ///
    /// The actor only stops once every clone of the client is gone, so callers
    /// must drop the router (and anything else holding a clone) first.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system...");

        // Dropping the last sender makes the actor's receive loop return None.
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Order system shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
