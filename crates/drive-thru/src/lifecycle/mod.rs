//! # System Lifecycle & Orchestration
//!
//! Manages the runtime lifecycle of the actor-backed order store: creating
//! the actor, injecting its dependencies, and coordinating graceful shutdown.
//!
//! ## The Orchestration Pattern
//!
//! The actor itself is simple; wiring is where the lifecycle lives. The
//! [`OrderSystem`] is the conductor:
//!
//! 1. **Creation** - instantiate the actor and its client
//! 2. **Dependency injection** - hand the menu to the actor via `run(menu)`
//! 3. **Shutdown** - drop the clients to close the channel, then await the
//!    actor task
//!
//! ## Graceful Shutdown
//!
//! Dropping every client closes the sender side of the channel; the actor's
//! `recv()` returns `None`, it logs its final size, and the task finishes.
//! `OrderSystem::shutdown` awaits that completion so no queued message is
//! lost.

pub mod order_system;

pub use order_system::*;
