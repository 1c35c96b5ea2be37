//! # Generic Messages
//!
//! Message types exchanged between the `StoreClient` and the `StoreActor`.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The store contract
/// The variants mirror the lifecycle of a sequenced registry rather than full
/// CRUD:
///
/// - **Create**: consumes the next sequence number and appends a new entity.
///   Replies with a clone of the full record, number included.
/// - **List**: snapshot of every entry in insertion order, no filtering.
/// - **Get**: fetch one entry by id; absence is `None`, not an error.
/// - **Update**: apply the entity's update hook in place; an unknown id is a
///   `NotFound` reply, a routine branch for callers.
/// - **Clear**: drop every entry and reset the sequence counter to 1.
///
/// There is no per-id delete: entries leave the store only through `Clear`.
///
/// The enum is generic over `T: StoreEntity`, so each actor only accepts the
/// payload types its entity declares.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Clear {
        respond_to: Response<()>,
    },
}
