//! # Order Actor
//!
//! The store actor managing [`Order`] entities: the authoritative in-memory
//! registry of orders for the lifetime of the process.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](actor_store::StoreEntity) implementation
//!   for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - factory that creates the actor and its generic client
//!
//! ## Usage
//!
//! The actor needs the menu as context; pass it to `run`:
//!
//! ```rust
//! use drive_thru::menu::Menu;
//! use drive_thru::order_actor;
//! use drive_thru::clients::OrderClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, generic_client) = order_actor::new();
//!     tokio::spawn(actor.run(Menu::standard()));
//!
//!     let client = OrderClient::new(generic_client);
//!     let orders = client.list_orders().await.unwrap();
//!     assert!(orders.is_empty());
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use actor_store::{StoreActor, StoreClient};

/// Creates a new Order store actor and its generic client.
pub fn new() -> (StoreActor<Order>, StoreClient<Order>) {
    StoreActor::new(32)
}
