//! # Actor Store
//!
//! Building blocks for type-safe, sequenced in-memory stores built on the
//! **Actor Model**: one Tokio task exclusively owns a registry of entities and
//! a monotonically increasing sequence counter, and processes requests
//! sequentially over a channel.
//!
//! ## Why an actor?
//!
//! A registry that assigns strictly increasing, gapless sequence numbers needs
//! its read-increment-append step to be atomic. Instead of wrapping a counter
//! and a list in a lock, the framework gives the whole state to a single task:
//!
//! - Isolated state — no shared memory, no `Mutex`
//! - Sequential processing inside the task eliminates races by construction
//! - Concurrent callers queue on the channel and still observe unique,
//!   gapless numbering
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity layer** ([`StoreEntity`]) — your domain model and its rules
//! 2. **Runtime layer** ([`StoreActor`]) — message processing and ownership
//! 3. **Interface layer** ([`StoreClient`]) — type-safe async communication
//!
//! Business logic is written once in the entity trait; the framework handles
//! message passing, sequencing, and state management.
//!
//! ## The store contract
//!
//! [`StoreRequest`] defines five operations: `Create` (consume the next
//! sequence number, append, reply with the full record), `List`
//! (insertion-ordered snapshot), `Get` (by id, `None` when absent), `Update` (entity
//! hook in place, `NotFound` for unknown ids), and `Clear` (drop everything,
//! reset the counter to 1). Every reply is a clone, so callers never hold a
//! reference into actor state.
//!
//! ## Quick start
//!
//! ```rust
//! use actor_store::{StoreActor, StoreEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32, label: String }
//!
//! #[derive(Debug)] struct TicketCreate { label: String }
//! #[derive(Debug)] struct TicketUpdate { label: String }
//! #[derive(Debug, thiserror::Error)]
//! #[error("ticket error")]
//! struct TicketError;
//!
//! #[async_trait]
//! impl StoreEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(seq: u32, params: TicketCreate, _: &()) -> Result<Self, TicketError> {
//!         Ok(Self { id: seq, label: params.label })
//!     }
//!     fn id(&self) -> u32 { self.id }
//!     async fn on_update(&mut self, update: TicketUpdate, _: &()) -> Result<(), TicketError> {
//!         self.label = update.label;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let first = client.create(TicketCreate { label: "a".into() }).await.unwrap();
//!     let second = client.create(TicketCreate { label: "b".into() }).await.unwrap();
//!     assert_eq!((first.id, second.id), (1, 2));
//!
//!     client.clear().await.unwrap();
//!     let again = client.create(TicketCreate { label: "c".into() }).await.unwrap();
//!     assert_eq!(again.id, 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected at runtime via `run(context)`, not at
//! construction time. An entity that needs a lookup table (say, a price list)
//! declares it as `type Context` and receives it in every hook:
//!
//! ```rust,ignore
//! let (actor, client) = StoreActor::<Order>::new(32);
//! tokio::spawn(actor.run(Menu::standard()));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] implements the same `StoreClient<T>` surface from a
//! queue of scripted expectations, for testing client-wrapper logic without
//! spawning an actor. Sequencing and storage semantics are tested against a
//! real actor; see this crate's integration tests.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::ActorClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
