use catalog_cart::cart_actor::CartError;
use catalog_cart::clients::actor_client::ActorClient;
use catalog_cart::lifecycle::{CatalogConfig, CatalogSystem};
use catalog_cart::model::{CartId, ProductCreate, ProductId, ProductUpdate};
use catalog_cart::product_actor::ProductError;
use std::collections::HashSet;

fn widget(title: &str, price: f64, stock: u32) -> ProductCreate {
    ProductCreate {
        title: Some(title.to_string()),
        price: Some(price),
        stock: Some(stock),
        ..Default::default()
    }
}

/// Full end-to-end integration test with both real actors.
#[tokio::test]
async fn test_full_catalog_cart_integration() {
    let system = CatalogSystem::new();

    // Create a product
    let product = system
        .product_client
        .create_product(widget("A", 10.99, 50))
        .await
        .expect("Failed to create product");
    assert!(!product.id.as_str().is_empty());

    // It is visible in the listing
    let products = system.product_client.list_products().await.unwrap();
    assert_eq!(products, vec![product.clone()]);

    // Create a cart and add the same product twice, one unit each
    let cart = system.cart_client.create_cart().await.expect("Failed to create cart");
    assert!(cart.items.is_empty());

    system
        .cart_client
        .add_item(cart.id.clone(), product.id.clone(), Some(1))
        .await
        .unwrap();
    let items = system
        .cart_client
        .add_item(cart.id.clone(), product.id.clone(), Some(1))
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);

    // Reading the cart joins the product record
    let resolved = system.cart_client.list_items(cart.id.clone()).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].product_id, product.id);
    assert_eq!(resolved[0].quantity, 2);
    assert_eq!(resolved[0].product.as_ref(), Some(&product));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_update_never_changes_id() {
    let system = CatalogSystem::new();
    let product = system
        .product_client
        .create_product(widget("A", 10.99, 50))
        .await
        .unwrap();

    let updated = system
        .product_client
        .update_product(
            product.id.clone(),
            ProductUpdate {
                id: Some(ProductId::from("other")),
                price: Some(Some(12.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.price, Some(12.0));
    assert_eq!(updated.title.as_deref(), Some("A"));
    assert_eq!(updated.stock, Some(50));

    let stored = system.product_client.get_product(product.id.clone()).await.unwrap();
    assert_eq!(stored, updated);

    let ghost = system.product_client.get(ProductId::from("other")).await.unwrap();
    assert!(ghost.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_with_null_clears_field() {
    let system = CatalogSystem::new();
    let product = system
        .product_client
        .create_product(ProductCreate {
            title: Some("T".into()),
            category: Some("C".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let update: ProductUpdate = serde_json::from_str(r#"{"category": null}"#).unwrap();
    let updated = system
        .product_client
        .update_product(product.id.clone(), update)
        .await
        .unwrap();

    assert_eq!(updated.category, None);
    assert_eq!(updated.title.as_deref(), Some("T"));
    assert_eq!(
        serde_json::to_value(&updated).unwrap(),
        serde_json::json!({ "id": product.id.as_str(), "title": "T" })
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let system = CatalogSystem::new();

    let result = system
        .product_client
        .update_product(ProductId::from("missing"), ProductUpdate::default())
        .await;
    assert_eq!(result, Err(ProductError::NotFound("missing".into())));

    assert!(system.product_client.list_products().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let system = CatalogSystem::new();
    let product = system
        .product_client
        .create_product(widget("Doomed", 1.0, 1))
        .await
        .unwrap();

    let removed = system.product_client.delete_product(product.id.clone()).await.unwrap();
    assert_eq!(removed, product);

    let result = system.product_client.get_product(product.id.clone()).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));

    let again = system.product_client.delete_product(product.id.clone()).await;
    assert_eq!(again, Err(ProductError::NotFound(product.id.to_string())));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_get_nonexistent_product() {
    let system = CatalogSystem::new();

    let result = system.product_client.get_product(ProductId::from("nonexistent")).await;
    assert_eq!(result, Err(ProductError::NotFound("nonexistent".into())));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_explicit_quantities_accumulate() {
    let system = CatalogSystem::new();
    let product = system
        .product_client
        .create_product(widget("A", 10.99, 50))
        .await
        .unwrap();
    let cart = system.cart_client.create_cart().await.unwrap();

    system
        .cart_client
        .add_item(cart.id.clone(), product.id.clone(), Some(2))
        .await
        .unwrap();
    let items = system
        .cart_client
        .add_item(cart.id.clone(), product.id.clone(), Some(3))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_legacy_non_positive_quantity_counts_as_one() {
    let system = CatalogSystem::new();
    let cart = system.cart_client.create_cart().await.unwrap();
    let product_id = ProductId::from("p1");

    system
        .cart_client
        .add_item(cart.id.clone(), product_id.clone(), Some(0))
        .await
        .unwrap();
    let items = system
        .cart_client
        .add_item(cart.id.clone(), product_id, Some(-4))
        .await
        .unwrap();
    assert_eq!(items[0].quantity, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleted_product_leaves_dangling_item() {
    let system = CatalogSystem::new();
    let kept = system
        .product_client
        .create_product(widget("Kept", 2.0, 5))
        .await
        .unwrap();
    let gone = system
        .product_client
        .create_product(widget("Gone", 3.0, 5))
        .await
        .unwrap();
    let cart = system.cart_client.create_cart().await.unwrap();

    system
        .cart_client
        .add_item(cart.id.clone(), gone.id.clone(), Some(4))
        .await
        .unwrap();
    system
        .cart_client
        .add_item(cart.id.clone(), kept.id.clone(), None)
        .await
        .unwrap();

    system.product_client.delete_product(gone.id.clone()).await.unwrap();

    let resolved = system.cart_client.list_items(cart.id.clone()).await.unwrap();
    assert_eq!(resolved.len(), 2, "Deleting a product must not touch carts");
    assert_eq!(resolved[0].product_id, gone.id);
    assert_eq!(resolved[0].quantity, 4);
    assert!(resolved[0].product.is_none());
    assert_eq!(resolved[1].product.as_ref(), Some(&kept));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_id_is_accepted_by_cart() {
    let system = CatalogSystem::new();
    let cart = system.cart_client.create_cart().await.unwrap();

    let items = system
        .cart_client
        .add_item(cart.id.clone(), ProductId::from("never-existed"), None)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);

    let resolved = system.cart_client.list_items(cart.id).await.unwrap();
    assert!(resolved[0].product.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_cart_is_not_found() {
    let system = CatalogSystem::new();
    let id = CartId::from("nonexistent");

    let add = system
        .cart_client
        .add_item(id.clone(), ProductId::from("p1"), None)
        .await;
    assert_eq!(add, Err(CartError::NotFound("nonexistent".into())));

    let list = system.cart_client.list_items(id.clone()).await;
    assert_eq!(list, Err(CartError::NotFound("nonexistent".into())));

    assert!(system.cart_client.get(id).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_adds_accumulate_exactly() {
    let system = CatalogSystem::new();
    let cart = system.cart_client.create_cart().await.unwrap();
    let product_id = ProductId::from("p1");

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let client = system.cart_client.clone();
        let cart_id = cart.id.clone();
        let product_id = product_id.clone();
        tasks.push(tokio::spawn(async move {
            client.add_item(cart_id, product_id, Some(3)).await
        }));
    }
    for task in tasks {
        task.await.unwrap().expect("add_item failed");
    }

    let resolved = system.cart_client.list_items(cart.id).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].quantity, 30);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeded_sample_products() {
    let config = CatalogConfig {
        seed_sample_data: true,
        ..Default::default()
    };
    let system = CatalogSystem::with_config(&config);

    let products = system.product_client.list_products().await.unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let first = system.product_client.get_product(ProductId::from("1")).await.unwrap();
    assert_eq!(first.price, Some(10.99));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_insertion_order_across_deletes() {
    let system = CatalogSystem::new();

    let mut ids = Vec::new();
    for title in ["a", "b", "c", "d"] {
        let product = system
            .product_client
            .create_product(widget(title, 1.0, 1))
            .await
            .unwrap();
        ids.push(product.id);
    }

    system.product_client.delete_product(ids[1].clone()).await.unwrap();
    let e = system
        .product_client
        .create_product(widget("e", 1.0, 1))
        .await
        .unwrap();

    let titles: Vec<String> = system
        .product_client
        .list_products()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["a", "c", "d", "e"]);
    assert!(!ids.contains(&e.id));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let system = CatalogSystem::new();

    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let product = system
            .product_client
            .create_product(ProductCreate::default())
            .await
            .unwrap();
        assert!(seen.insert(product.id), "Duplicate product id issued");
    }

    let carts: HashSet<CartId> = create_carts(&system).await;
    assert_eq!(carts.len(), 50);

    system.shutdown().await.unwrap();
}

async fn create_carts(system: &CatalogSystem) -> HashSet<CartId> {
    let mut ids = HashSet::new();
    for _ in 0..50 {
        ids.insert(system.cart_client.create_cart().await.unwrap().id);
    }
    ids
}

#[tokio::test]
async fn test_clean_shutdown_after_traffic() {
    let system = CatalogSystem::new();
    let cart = system.cart_client.create_cart().await.unwrap();
    system
        .cart_client
        .add_item(cart.id, ProductId::from("p1"), None)
        .await
        .unwrap();

    system.shutdown().await.expect("Shutdown failed");
}
