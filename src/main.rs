//! Demo: one product, one cart, the same product added twice, then the joined view.

use catalog_cart::clients::ActorClient;
use catalog_cart::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use catalog_cart::model::{ProductCreate, ProductUpdate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    info!(?config, "Starting catalog system");

    let system = CatalogSystem::with_config(&config);

    let params = ProductCreate {
        title: Some("Producto A".to_string()),
        description: Some("Demo product".to_string()),
        code: Some("A-001".to_string()),
        price: Some(10.99),
        status: Some(true),
        stock: Some(50),
        category: Some("Electronics".to_string()),
        thumbnails: Some(vec!["a.jpg".to_string()]),
    };
    let product = system
        .product_client
        .create_product(params)
        .instrument(tracing::info_span!("product_creation"))
        .await?;
    info!(product_id = %product.id, "Product created");

    let span = tracing::info_span!("cart_filling");
    let cart = async {
        let cart = system.cart_client.create_cart().await?;
        system
            .cart_client
            .add_item(cart.id.clone(), product.id.clone(), Some(1))
            .await?;
        system
            .cart_client
            .add_item(cart.id.clone(), product.id.clone(), None)
            .await?;
        Ok::<_, catalog_cart::cart_actor::CartError>(cart)
    }
    .instrument(span)
    .await?;
    info!(cart_id = %cart.id, "Cart filled");

    // Identity stays pinned even when the patch names another id.
    let update = ProductUpdate {
        id: Some("other".into()),
        stock: Some(Some(48)),
        ..Default::default()
    };
    let updated = system
        .product_client
        .update_product(product.id.clone(), update)
        .await?;
    info!(product_id = %updated.id, stock = ?updated.stock, "Product updated");

    let resolved = system.cart_client.list_items(cart.id.clone()).await?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);

    system.product_client.delete_product(product.id.clone()).await?;
    let dangling = system.cart_client.list_items(cart.id.clone()).await?;
    for item in dangling.iter().filter(|item| item.product.is_none()) {
        warn!(product_id = %item.product_id, "Cart references a deleted product");
    }

    if system.cart_client.get(cart.id).await?.is_some() {
        info!(
            products = system.product_client.list_products().await?.len(),
            "Demo finished"
        );
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
