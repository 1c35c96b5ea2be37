//! # Order Client
//!
//! High-level API over the Order store actor. This is the surface the voice
//! front end (create), the kitchen display (list + complete), and the seed
//! utility (clear + create) call.

use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use actor_store::{ActorClient, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order store actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Submits a finalized item list as a new order.
    ///
    /// Returns the stored record, assigned order number included. Price
    /// resolution and the total happen inside the actor, once.
    #[instrument(skip(self))]
    pub async fn submit_order(&self, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        debug!(lines = items.len(), "Submitting order");
        self.inner
            .create(OrderCreate { items })
            .await
            .map_err(Self::map_store_error)
    }

    /// Snapshot of every order, pending and completed, in creation order.
    /// Filtering to pending is the caller's concern.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.inner.list().await.map_err(Self::map_store_error)
    }

    /// Marks an order completed and returns the updated record.
    ///
    /// Unknown ids surface as [`OrderError::NotFound`]. Completing an
    /// already-completed order succeeds and leaves it completed.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: &OrderId) -> Result<Order, OrderError> {
        debug!(%id, "Completing order");
        self.inner
            .update(
                id.clone(),
                OrderUpdate {
                    status: OrderStatus::Completed,
                },
            )
            .await
            .map_err(Self::map_store_error)
    }

    /// Removes every order and resets the order-number counter to 1.
    /// Unconditional; confirmation, if any, is a UI concern.
    #[instrument(skip(self))]
    pub async fn clear_orders(&self) -> Result<(), OrderError> {
        self.inner.clear().await.map_err(Self::map_store_error)
    }

    fn map_store_error(e: StoreError) -> OrderError {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_err) => *order_err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderClient::map_store_error(e)
    }
}
