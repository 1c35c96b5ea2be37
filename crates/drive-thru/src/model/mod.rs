//! # Domain Model
//!
//! Pure data structures for the drive-thru domain. The [`Order`] type
//! implements [`StoreEntity`](actor_store::StoreEntity) in
//! [`crate::order_actor::entity`], which is what lets the generic store actor
//! manage it.

pub mod order;

pub use order::{Order, OrderCreate, OrderId, OrderItem, OrderStatus, OrderUpdate};
