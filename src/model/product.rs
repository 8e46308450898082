//! Catalog product record and its create/update payloads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ProductId;

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// Only `id` is mandatory. Every other field is whatever the caller supplied at creation
/// or in later updates; fields never supplied stay `None` and are left out when the
/// product is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Availability flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<String>>,
}

impl Product {
    /// Builds a product from a freshly issued id and the caller's fields.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
            code: params.code,
            price: params.price,
            status: params.status,
            stock: params.stock,
            category: params.category,
            thumbnails: params.thumbnails,
        }
    }

    /// Shallow merge: supplied fields overwrite (an explicit `null` clears), the rest
    /// are kept.
    ///
    /// The identifier is written back last, so `update.id` can never change it.
    pub fn merge(&mut self, update: ProductUpdate) {
        let id = self.id.clone();

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(thumbnails) = update.thumbnails {
            self.thumbnails = thumbnails;
        }

        self.id = id;
    }
}

/// Fields accepted when creating a product. The id is always issued by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

/// Partial update for a product.
///
/// Each field has three states: `None` leaves the stored value as is, `Some(None)`
/// (JSON `null`) clears it and `Some(Some(v))` overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// Accepted so request bodies carrying an id deserialize, but never applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<bool>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub stock: Option<Option<u32>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Option<Vec<String>>>,
}

/// Marks a key that is present in the input, even when its value is `null`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// The two demo products the catalog can be seeded with at startup.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::from("1"),
            title: Some("Producto 1".to_string()),
            description: Some("Descripción del producto 1".to_string()),
            code: Some("ABC123".to_string()),
            price: Some(10.99),
            status: Some(true),
            stock: Some(50),
            category: Some("Electronics".to_string()),
            thumbnails: Some(vec!["image1.jpg".to_string(), "image2.jpg".to_string()]),
        },
        Product {
            id: ProductId::from("2"),
            title: Some("Producto 2".to_string()),
            description: Some("Descripción del producto 2".to_string()),
            code: Some("DEF456".to_string()),
            price: Some(19.99),
            status: Some(false),
            stock: Some(25),
            category: Some("Clothing".to_string()),
            thumbnails: Some(vec!["image3.jpg".to_string()]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(
            ProductId::from("p1"),
            ProductCreate {
                title: Some("Widget".into()),
                price: Some(10.99),
                stock: Some(50),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_merge_overwrites_supplied_and_keeps_the_rest() {
        let mut product = widget();
        product.merge(ProductUpdate {
            price: Some(Some(12.5)),
            category: Some(Some("Tools".into())),
            ..Default::default()
        });

        assert_eq!(product.price, Some(12.5));
        assert_eq!(product.category.as_deref(), Some("Tools"));
        assert_eq!(product.title.as_deref(), Some("Widget"));
        assert_eq!(product.stock, Some(50));
    }

    #[test]
    fn test_explicit_null_clears_field() {
        let mut product = widget();
        product.category = Some("Tools".into());

        let update: ProductUpdate =
            serde_json::from_str(r#"{"category": null, "price": 9.5}"#).unwrap();
        assert_eq!(update.category, Some(None));
        assert_eq!(update.title, None);

        product.merge(update);
        assert_eq!(product.category, None);
        assert_eq!(product.price, Some(9.5));
        assert_eq!(product.title.as_deref(), Some("Widget"));

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_merge_never_changes_id() {
        let mut product = widget();
        product.merge(ProductUpdate {
            id: Some(ProductId::from("other")),
            title: Some(Some("Renamed".into())),
            ..Default::default()
        });

        assert_eq!(product.id, ProductId::from("p1"));
        assert_eq!(product.title.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let product = Product::new(
            ProductId::from("p2"),
            ProductCreate {
                title: Some("Bare".into()),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "p2", "title": "Bare" }));
    }

    #[test]
    fn test_create_payload_ignores_client_supplied_id() {
        let params: ProductCreate =
            serde_json::from_str(r#"{"id":"mine","title":"T","stock":3}"#).unwrap();
        let product = Product::new(ProductId::from("issued"), params);

        assert_eq!(product.id, ProductId::from("issued"));
        assert_eq!(product.stock, Some(3));
    }

    #[test]
    fn test_sample_products() {
        let samples = sample_products();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].id, ProductId::from("1"));
        assert_eq!(samples[1].status, Some(false));
    }
}
