//! # Product Client
//!
//! High-level API over the product store. Wraps a `ResourceClient<Product>` and turns
//! framework failures into [`ProductError`].
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// All products, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list().await.map_err(ProductError::from)
    }

    /// The product with this id, or [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .get(id.clone())
            .await
            .map_err(ProductError::from)?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Stores a new product under a freshly issued id and returns it.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Merges `update` into the stored product. The id never changes.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ProductError::from)
    }

    /// Removes the product and returns the removed record.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(ProductError::from)
    }
}
