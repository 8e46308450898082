//! [`CatalogSystem`]: starts, wires and stops the product and cart actors.

use crate::cart_actor;
use crate::clients::{CartClient, ProductClient};
use crate::lifecycle::CatalogConfig;
use crate::model::sample_products;
use crate::product_actor;
use tracing::{error, info};

/// The runtime orchestrator for the catalog and cart actors.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting both actors and stopping them on shutdown
/// - **Dependency Wiring**: handing the cart actor a `ProductClient` as its context
/// - **Seeding**: preloading sample products when configured
///
/// The dependency runs one way only (carts read products), so dropping the clients
/// is enough to stop both actors.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
///
/// let product = system.product_client.create_product(params).await?;
/// let cart = system.cart_client.create_cart().await?;
/// system.cart_client.add_item(cart.id.clone(), product.id.clone(), None).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts both actors with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&CatalogConfig::default())
    }

    /// Starts both actors using `config`.
    pub fn with_config(config: &CatalogConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (product_actor, product_client) = product_actor::new(config.actor_buffer);
        let (cart_actor, cart_client) = cart_actor::new(config.actor_buffer);

        let product_actor = if config.seed_sample_data {
            product_actor.with_entities(sample_products())
        } else {
            product_actor
        };
        let product_client = ProductClient::new(product_client);

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(product_client.clone()));

        info!(
            actor_buffer = config.actor_buffer,
            seeded = config.seed_sample_data,
            "Catalog system started"
        );

        Self {
            product_client,
            cart_client: CartClient::new(cart_client),
            handles: vec![product_handle, cart_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the request channels; each actor drains what it
    /// already received, logs its final size and exits. The cart actor holds its own
    /// `ProductClient` clone, so the product actor stops only after the cart actor has.
    ///
    /// Returns `Err` if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
