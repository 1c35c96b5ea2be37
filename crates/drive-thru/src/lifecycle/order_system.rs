//! The runtime orchestrator for the order store.

use crate::clients::OrderClient;
use crate::menu::Menu;
use crate::order_actor;
use tracing::info;

/// Owns the running order actor and hands out its client.
///
/// The store is long-lived, process-wide state: constructed once (empty,
/// counter at 1) and torn down only when the system shuts down. The explicit
/// handle makes lifecycle and test isolation explicit - every test builds its
/// own system instead of sharing ambient globals.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let order = system.order_client.submit_order(items).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor.
    pub order_client: OrderClient,

    /// Handle for the running actor task, used for graceful shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Creates the order actor, injects the standard menu, and spawns it.
    pub fn new() -> Self {
        Self::with_menu(Menu::standard())
    }

    /// Creates the system with a caller-supplied price table.
    pub fn with_menu(menu: Menu) -> Self {
        let (actor, generic_client) = order_actor::new();
        let order_client = OrderClient::new(generic_client);

        let handle = tokio::spawn(actor.run(menu));
        info!("Order system started");

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client (closing the channel), then waits for the actor task
    /// to drain and finish. Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.order_client);

        self.handle
            .await
            .map_err(|e| format!("order actor task failed: {e}"))?;

        info!("Order system shut down");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
