use std::net::SocketAddr;
use std::sync::Arc;

use gearbox_api::{app, AppState};
use gearbox_catalog::CatalogService;
use gearbox_order::OrderService;
use gearbox_store::{seed_demo_data, Config, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gearbox_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let store = Arc::new(MemoryStore::new());
    if config.server.seed_demo_data {
        seed_demo_data(&store)
            .await
            .map_err(|e| anyhow::anyhow!("Seeding demo data failed: {}", e))?;
    }

    let catalog = Arc::new(CatalogService::new(store.clone()));
    let orders = Arc::new(OrderService::new(
        store.clone(),
        catalog.clone(),
        config.business_rules.clone(),
    ));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Gearbox API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(AppState::new(catalog, orders))).await?;

    Ok(())
}
