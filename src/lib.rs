//! # Catalog & Cart
//!
//! > **An in-memory product catalog and shopping carts, served by resource actors.**
//!
//! Two stores, each a Tokio task that owns its collection outright:
//!
//! - the **product store** supports create, list, get, partial update and delete;
//! - the **cart store** supports create, add-or-increment an item, and a read that joins
//!   each item with the product it references.
//!
//! Callers never touch the collections. They hold cloneable clients and every
//! operation is a message, so each store sees its requests strictly one at a time.
//! Two concurrent `add_item` calls for the same product therefore accumulate
//! exactly. There are no locks.
//!
//! ## Consistency Rules
//!
//! - **Identity**: ids are issued by the store (base-36 time + random) and never change.
//!   A product update carrying a different `id` is merged with the id pinned.
//! - **Weak references**: a cart item stores only a [`ProductId`](model::ProductId).
//!   Deleting a product leaves cart items alone; reading the cart yields `product: None`
//!   for them.
//! - **Accumulation**: adding a product already in the cart increments its quantity. A
//!   missing, zero or negative quantity counts as 1.
//! - **Errors**: `NotFound` is the only domain error and it never leaves a partial
//!   mutation behind.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor), its request enum, its client,
//! identifier generation and test mocks.
//!
//! ### 2. The Data ([`model`])
//! [`Product`](model::Product), [`Cart`](model::Cart) and their payloads.
//!
//! ### 3. The Stores ([`product_actor`], [`cart_actor`])
//! `ActorEntity` implementations and per-store errors.
//!
//! ### 4. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) and [`CartClient`](clients::CartClient).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`CatalogSystem`](lifecycle::CatalogSystem), configuration and tracing setup.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_cart::lifecycle::CatalogSystem;
//! use catalog_cart::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = CatalogSystem::new();
//!
//!     let product = system
//!         .product_client
//!         .create_product(ProductCreate { price: Some(10.99), ..Default::default() })
//!         .await?;
//!     let cart = system.cart_client.create_cart().await?;
//!
//!     system.cart_client.add_item(cart.id.clone(), product.id.clone(), None).await?;
//!     system.cart_client.add_item(cart.id.clone(), product.id.clone(), None).await?;
//!
//!     let items = system.cart_client.list_items(cart.id).await?;
//!     assert_eq!(items[0].quantity, 2);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
