//! # Cart Client
//!
//! High-level API over the cart store. Custom actions are unpacked into plain return
//! types so callers never match on [`CartActionResult`].
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, CartId, CartItem, ProductId, ResolvedItem};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::from(e)
    }
}

impl CartClient {
    /// Creates an empty cart.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate).await.map_err(CartError::from)
    }

    /// The cart's items joined with their products, in item order.
    ///
    /// Items whose product no longer exists come back with `product: None`.
    #[instrument(skip(self))]
    pub async fn list_items(&self, id: CartId) -> Result<Vec<ResolvedItem>, CartError> {
        debug!("Resolving items for cart {}", id);
        match self
            .inner
            .perform_action(id, CartAction::ResolveItems)
            .await
            .map_err(CartError::from)?
        {
            CartActionResult::ResolveItems(items) => Ok(items),
            other => Err(CartError::UnexpectedResponse(format!("{:?}", other))),
        }
    }

    /// Adds `quantity` of a product (default 1), accumulating onto an existing line.
    ///
    /// Returns the cart's items after the change.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        id: CartId,
        product_id: ProductId,
        quantity: Option<i64>,
    ) -> Result<Vec<CartItem>, CartError> {
        debug!("Adding {:?} of product {} to cart {}", quantity, product_id, id);
        let action = CartAction::AddItem {
            product_id,
            quantity,
        };
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(CartError::from)?
        {
            CartActionResult::AddItem(items) => Ok(items),
            other => Err(CartError::UnexpectedResponse(format!("{:?}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_add_item_forwards_raw_quantity() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move {
            cart_client
                .add_item(CartId::from("cart_1"), ProductId::from("p1"), None)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, CartId::from("cart_1"));
        match action {
            CartAction::AddItem {
                product_id,
                quantity,
            } => {
                assert_eq!(product_id, ProductId::from("p1"));
                assert_eq!(quantity, None);
            }
            _ => panic!("Expected AddItem action"),
        }

        let items = vec![CartItem {
            product_id: ProductId::from("p1"),
            quantity: 1,
        }];
        responder.send(Ok(CartActionResult::AddItem(items.clone()))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), items);
    }

    #[tokio::test]
    async fn test_list_items_unknown_cart_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.list_items(CartId::from("nope")).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, CartAction::ResolveItems));
        responder.send(Err(FrameworkError::NotFound("nope".into()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(CartError::NotFound("nope".into())));
    }

    #[tokio::test]
    async fn test_mismatched_result_is_reported() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.list_items(CartId::from("c1")).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder.send(Ok(CartActionResult::AddItem(Vec::new()))).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(CartError::UnexpectedResponse(_))
        ));
    }
}
