//! Custom actions for the Cart actor.

use crate::model::{CartItem, ProductId, ResolvedItem};

/// Operations on a cart beyond plain create/get.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds a product, or increments its quantity if it is already in the cart.
    ///
    /// `quantity` is passed through untouched from the caller; see
    /// [`effective_quantity`](crate::model::effective_quantity) for how it is normalized.
    AddItem {
        product_id: ProductId,
        quantity: Option<i64>,
    },
    /// Joins every item with its current product record.
    ResolveItems,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The cart's items after the addition.
    AddItem(Vec<CartItem>),
    /// The joined view, in item order.
    ResolveItems(Vec<ResolvedItem>),
}
