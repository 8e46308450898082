//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the two stores.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when started:
//!
//! ```rust,ignore
//! impl ActorEntity for Product { type Context = (); }
//! impl ActorEntity for Cart { type Context = ProductClient; }
//! ```
//!
//! [`CatalogSystem`] creates both actors, starts the product actor with `()` and the
//! cart actor with a clone of the product client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of the channels
//! 2. **Actors detect closure**: `receiver.recv()` returns `None`
//! 3. **Await completion**: wait for both tasks to finish
//!
//! The graph is acyclic (carts → products), so closure-driven shutdown always
//! terminates.
//!
//! ## Configuration & Observability
//!
//! - [`CatalogConfig`] reads channel capacity and seeding from the environment.
//! - [`setup_tracing`] initializes structured logging; see the [`tracing`](self::tracing) module.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use self::tracing::setup_tracing;
