//! Inventory Visibility - dashboard backend

use anyhow::{Context, Result};
use inventory_visibility::domain::seed;
use inventory_visibility::{api, AppConfig, Inventory, InventoryService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();
    let config = AppConfig::from_env().context("loading configuration")?;

    let products = match &config.seed_path {
        Some(path) => seed::load_products(path).with_context(|| format!("loading seed file {}", path.display()))?,
        None => seed::default_products(),
    };
    let inventory = Inventory::new(products).context("seeding inventory")?;
    tracing::info!(products = inventory.len(), warehouses = inventory.warehouses().len(), "inventory seeded");

    let app = api::app(InventoryService::new(inventory), config.static_dir.as_deref());
    if let Some(dir) = &config.static_dir {
        tracing::info!("serving client from {}", dir.display());
    }

    let addr = config.bind_addr();
    tracing::info!("📦 Inventory visibility listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(&addr).await?, app).await?;
    Ok(())
}
