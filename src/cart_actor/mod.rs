//! # Cart Actor
//!
//! The cart store: a [`ResourceActor`] over [`Cart`] whose context is a
//! [`ProductClient`](crate::clients::ProductClient).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Add or increment (quantity None => 1)
//! let items = cart_client.add_item(cart_id.clone(), product_id, Some(2)).await?;
//!
//! // Join items with the current product records
//! let resolved = cart_client.list_items(cart_id).await?;
//! ```
//!
//! ## Wiring
//!
//! The product client is injected at `run()` time, so the cart actor can be created
//! before the product actor is running:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! tokio::spawn(cart_actor.run(product_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Cart, CartId};

/// Creates a new Cart actor and its client. Ids come from [`CartId::generate`].
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size, CartId::generate)
}
