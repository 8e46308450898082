//! Shopping cart records.
//!
//! A cart holds product *references*, never products: each [`CartItem`] stores a
//! [`ProductId`] and a quantity. The product behind the id is looked up only when the
//! cart is read, producing [`ResolvedItem`]s.

use serde::{Deserialize, Serialize};

use crate::model::{CartId, Product, ProductId};

/// Quantity used when the caller omits one.
pub const DEFAULT_QUANTITY: u64 = 1;

/// A shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    /// Items in first-added order, at most one per product.
    pub items: Vec<CartItem>,
}

/// One product line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// A cart item joined with the product it references at read time.
///
/// `product` is `None` when the reference dangles (the product was deleted or never
/// existed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedItem {
    pub product_id: ProductId,
    pub quantity: u64,
    pub product: Option<Product>,
}

/// Payload for creating a cart. Carts always start empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCreate;

/// Normalizes a requested quantity.
///
/// Missing, zero and negative quantities all become [`DEFAULT_QUANTITY`]. Non-positive
/// values are coerced rather than rejected to stay compatible with existing callers.
pub fn effective_quantity(requested: Option<i64>) -> u64 {
    match requested {
        Some(quantity) if quantity > 0 => quantity.unsigned_abs(),
        _ => DEFAULT_QUANTITY,
    }
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Adds `quantity` of `product_id`, incrementing the existing line if there is one.
    ///
    /// The product id is not checked against the catalog and no stock limit applies.
    /// Quantities saturate at `u64::MAX`.
    pub fn add_item(&mut self, product_id: ProductId, quantity: Option<i64>) -> &[CartItem] {
        let quantity = effective_quantity(quantity);

        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem {
                product_id,
                quantity,
            }),
        }

        &self.items
    }
}
