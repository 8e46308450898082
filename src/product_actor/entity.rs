//! [`ActorEntity`] implementation for [`Product`].
//!
//! Products need nothing beyond CRUD: creation copies the supplied fields, updates are
//! a shallow merge that pins the id, and there are no custom actions.

use std::convert::Infallible;

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Field values are taken as supplied; absent ones stay absent.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Product::new(id, params))
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.merge(update);
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
