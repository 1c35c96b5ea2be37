//! # Clients
//!
//! Type-safe wrappers around the generic [`StoreClient`](actor_store::StoreClient)
//! that expose the order operations the rest of the system consumes.

pub mod order_client;

pub use order_client::OrderClient;
