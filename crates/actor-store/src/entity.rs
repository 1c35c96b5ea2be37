//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract a domain type must implement to be
//! managed by the generic [`StoreActor`](crate::StoreActor). It specifies
//! associated types for the identifier, the creation and update payloads, the
//! injected context, and the error type, plus the hooks the actor calls while
//! processing requests.
//!
//! # Architecture Note
//! By defining one contract that every stored resource satisfies, the actor
//! loop is written *once* and reused for any entity. Associated types keep the
//! whole pipeline type-safe: an `Order` actor can only receive `OrderCreate`
//! payloads, never some other resource's DTO.
//!
//! # Sequence-aware construction
//! Unlike a plain CRUD registry, the actor does not invent the entity's
//! identifier. It hands [`StoreEntity::from_create_params`] the next value of
//! its monotonically increasing sequence counter together with the injected
//! context, and the entity decides what to derive from them (a human-facing
//! sequence number, a priced total, an opaque id of its own choosing). The
//! actor then reads the identifier back via [`StoreEntity::id`] for later
//! lookups.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract a domain type implements to be managed by a `StoreActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so update hooks may await other actors. The
/// `Context` is injected into every hook via `StoreActor::run(ctx)`, allowing
/// "late binding" of dependencies (lookup tables, other clients) after
/// construction.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique, opaque identifier for this entity.
    ///
    /// Produced by the entity itself in `from_create_params`; the actor only
    /// uses it for lookups.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per entity rather than one per operation. The enum must
    /// be the union of everything the hooks can report, which loses a little
    /// precision but keeps client-side pattern matching simple.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned sequence number, the
    /// creation payload, and the injected context.
    ///
    /// `seq` is the value of the actor's counter for this creation. The
    /// counter has already been advanced when this is called and is never
    /// rolled back, so a failing construction still consumes the number.
    fn from_create_params(
        seq: u32,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// The identifier the actor should index this entity under.
    fn id(&self) -> Self::Id;

    /// Called when an update request is received. The entity mutates its own
    /// state; the actor returns the post-update clone to the caller.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
