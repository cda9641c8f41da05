//! Shared fixtures for unit tests.

use crate::clients::OrderStore;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts an order registry actor and returns it behind the storage trait.
pub fn spawn_registry() -> (Arc<dyn OrderStore>, JoinHandle<()>) {
    let (actor, client) = crate::order_actor::new();
    let handle = tokio::spawn(actor.run(()));
    (Arc::new(client), handle)
}
