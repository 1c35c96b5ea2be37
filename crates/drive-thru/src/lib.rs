//! # Drive-Thru Order Store
//!
//! The backend of a demo drive-thru ordering application: an in-process order
//! store with monotonically increasing order numbers, a one-way
//! `pending → completed` lifecycle, and the API surface its collaborators
//! consume (a voice-ordering front end submitting finalized item lists, a
//! kitchen display polling for orders and marking them done, and a seed
//! utility for demo data).
//!
//! ## Core Components
//!
//! - **[model]**: the [`Order`](model::Order) record and its DTOs
//! - **[menu]**: the static price table consulted at order creation
//! - **[order_actor]**: the [`StoreEntity`](actor_store::StoreEntity)
//!   implementation that gives `Order` its sequencing and transition rules,
//!   managed by the generic [`StoreActor`](actor_store::StoreActor)
//! - **[clients]**: the [`OrderClient`](clients::OrderClient) wrapper hiding
//!   message passing behind typed async methods
//! - **[api]**: the untrusted-JSON boundary with its client-error signal
//! - **[lifecycle]**: the [`OrderSystem`](lifecycle::OrderSystem) that wires
//!   and shuts down the actor
//! - **[seed]**: clear-then-create demo data
//!
//! ## Concurrency
//!
//! All order mutation is serialized through one actor task, so order numbers
//! stay unique and gapless even under concurrent submission; see the
//! `actor-store` crate for the model.

pub mod api;
pub mod clients;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod order_actor;
pub mod seed;
