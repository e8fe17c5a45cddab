//! # Storefront Demo Binary
//!
//! Runs a scripted shopper-then-admin flow against a file-backed store:
//! restore state, log in, browse and search the catalog, fill the cart,
//! check out, transition the order as admin, and print revenue.
//!
//! ## Usage
//! ```bash
//! # Default data directory (./data)
//! cargo run -p namma-storefront --bin storefront
//!
//! # Custom data directory and catalog file
//! cargo run -p namma-storefront --bin storefront -- ./my-data ./catalog.json
//! ```
//!
//! Re-running against the same data directory demonstrates restoration:
//! the session, cart, and order history from the previous run come back.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use namma_core::{FulfillmentType, OrderStatus};
use namma_storefront::{Latency, Storefront};
use namma_store::JsonFileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "./data".to_string());
    let catalog = match args.next() {
        Some(path) => namma_storefront::seed::load_catalog(&PathBuf::from(path))?,
        None => namma_storefront::seed::sample_catalog(),
    };

    let store = Arc::new(JsonFileStore::open(&data_dir)?);
    let shop = Storefront::new(catalog, store, Latency::simulated());

    if let Some(user) = shop.session.current_user() {
        info!(username = %user.username, role = ?user.role, "restored previous session");
    }

    // Shopper flow.
    if !shop.session.login("nammarecipe", "user").await {
        return Err("demo login failed".into());
    }
    let user = shop.session.current_user().expect("just logged in");

    shop.catalog.search("rice");
    for recipe in shop.catalog.filtered() {
        info!(name = %recipe.name, price = %recipe.ready_food_price, "search hit");
    }
    shop.catalog.clear_filters();

    let generated = shop
        .catalog
        .generate("something festive with paneer")
        .await
        .expect("catalog is non-empty");
    info!(name = %generated.name, "generated suggestion");

    shop.cart.add_item(&generated, FulfillmentType::ReadyFood);
    shop.cart.add_item(&generated, FulfillmentType::ReadyFood);
    if let Some(featured) = shop.catalog.featured().first() {
        shop.cart.add_item(featured, FulfillmentType::Ingredients);
    }
    info!(total = %shop.cart.total_price(), "cart ready for checkout");

    let order_id = shop
        .orders
        .create_order(&user.id, shop.cart.items(), "12 Gandhi Road, Chennai", "9876543210")
        .await?;
    shop.cart.clear();
    info!(order_id = %order_id, "order placed");

    // Admin flow.
    shop.session.logout();
    if !shop.session.login("nammarecipe", "admin").await {
        return Err("demo admin login failed".into());
    }

    shop.orders.update_status(&order_id, OrderStatus::Confirmed).await?;
    shop.orders.update_status(&order_id, OrderStatus::Processing).await?;
    shop.orders.update_status(&order_id, OrderStatus::Completed).await?;

    for order in shop.orders.all_orders().await {
        info!(
            order_id = %order.id,
            status = ?order.status,
            total = %order.total_amount,
            "order on record"
        );
    }

    let stats = shop.orders.revenue_stats();
    info!(
        total = %stats.total,
        confirmed = %stats.confirmed,
        rejected = %stats.rejected,
        "revenue stats"
    );

    Ok(())
}
