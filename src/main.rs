//! Blossom Storefront - demo entry point.
//!
//! Wires the application core from the environment and runs a catalog smoke
//! fetch so the wiring is visible end to end.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blossom_storefront::session::JsonFileStore;
use blossom_storefront::{Config, Storefront};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let session_file =
        std::env::var("STOREFRONT_SESSION_FILE").unwrap_or_else(|_| "session.json".to_owned());
    let store = JsonFileStore::open(session_file)?;
    let app = Storefront::new(&config, store)?;

    tracing::info!(base_url = %config.base_url, "storefront core ready");
    if let Some(user) = app.session().user() {
        tracing::info!(user = %user.username, "restored session");
    }

    match app.api().list_products().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog reachable");
            for product in products.iter().take(5) {
                tracing::info!(
                    id = product.id,
                    name = %product.name,
                    price = product.effective_price(),
                    "product"
                );
            }
        }
        Err(err) => tracing::warn!(%err, "catalog fetch failed"),
    }

    Ok(())
}
