//! [`ActorEntity`] implementation for [`Cart`].
//!
//! The cart actor runs with a [`ProductClient`] as its context. That client is the only
//! path from carts to products, and it is used strictly for single-product reads while
//! resolving items, so the product actor is never held by a cart request for longer
//! than one lookup.

use std::convert::Infallible;

use async_trait::async_trait;
use tracing::debug;

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::{ActorClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate, CartId, ResolvedItem};

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = Infallible;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ProductClient;
    type Error = CartError;

    fn id(&self) -> &CartId {
        &self.id
    }

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &ProductClient) -> Result<(), Self::Error> {
        match update {}
    }

    /// # Actions
    /// - `AddItem`: add-or-increment, returns the updated items
    /// - `ResolveItems`: looks up each item's product; a missing product yields `None`
    async fn handle_action(
        &mut self,
        action: CartAction,
        products: &ProductClient,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddItem {
                product_id,
                quantity,
            } => {
                let items = self.add_item(product_id, quantity).to_vec();
                Ok(CartActionResult::AddItem(items))
            }
            CartAction::ResolveItems => {
                let mut resolved = Vec::with_capacity(self.items.len());
                for item in &self.items {
                    let product = products
                        .get(item.product_id.clone())
                        .await
                        .map_err(|e| CartError::ProductLookup(e.to_string()))?;
                    debug!(cart_id = %self.id, product_id = %item.product_id, found = product.is_some(), "Resolved item");
                    resolved.push(ResolvedItem {
                        product_id: item.product_id.clone(),
                        quantity: item.quantity,
                        product,
                    });
                }
                Ok(CartActionResult::ResolveItems(resolved))
            }
        }
    }
}
