//! Generic actor framework for resource management.
//!
//! The building blocks both stores are made of: a single-owner actor that keeps an
//! ordered collection of entities, the request envelope it serves, and the client
//! used to reach it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns and mutates the collection
//! - [`ResourceClient`] - Cloneable, type-safe handle to a running actor
//! - [`FrameworkError`] - Common error types
//! - [`id`] - Identifier generators
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
