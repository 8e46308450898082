//! # Product Actor
//!
//! The product store: a [`ResourceActor`] over [`Product`] that owns the catalog.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_cart::clients::ProductClient;
//! use catalog_cart::model::{ProductCreate, ProductUpdate};
//! use catalog_cart::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // No dependencies
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client
//!         .create_product(ProductCreate {
//!             title: Some("Widget".to_string()),
//!             price: Some(29.99),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     let update = ProductUpdate { stock: Some(Some(10)), ..Default::default() };
//!     let updated = client.update_product(created.id.clone(), update).await?;
//!     assert_eq!(updated.stock, Some(10));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Product, ProductId};

/// Creates a new Product actor and its client. Ids come from [`ProductId::generate`].
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size, ProductId::generate)
}
