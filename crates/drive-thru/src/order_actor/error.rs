//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
///
/// `NotFound` and `InvalidItems` are the two reportable conditions of the
/// order contract; both are routine branches for callers, not exceptional
/// states.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The create request body did not carry a usable items array.
    #[error("Invalid order data: {0}")]
    InvalidItems(String),

    /// A completed order cannot go back to pending.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
