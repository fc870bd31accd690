use anyhow::Context;
use product_recommendation::{Config, InMemoryCatalog, RecommendationService};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load config
    let config = Config::from_env().context("Failed to load config")?;

    info!(
        "Starting {} v{} with catalog {}",
        config.service.service_name,
        env!("CARGO_PKG_VERSION"),
        config.service.catalog_path
    );

    let catalog = InMemoryCatalog::load(&config.service.catalog_path)
        .await
        .context("Failed to load catalog")?;

    let service = RecommendationService::new(
        Arc::new(catalog),
        config.recommendation.ranker_config(),
        config.recommendation.default_limit,
        config.recommendation.trending_limit,
    )?;

    info!(
        default_limit = service.default_limit(),
        trending_limit = service.trending_limit(),
        "Recommendation service ready"
    );

    // With a product id: similar products. Without: trending.
    let output = match std::env::args().nth(1) {
        Some(product_id) => {
            let response = service.recommend_for(&product_id).await.map_err(|e| {
                error!(product_id = %product_id, error = %e, "Recommendation failed");
                e
            })?;
            if response.items.is_empty() {
                info!(product_id = %product_id, "No similar products found");
            }
            serde_json::to_string_pretty(&response)?
        }
        None => {
            let trending = service.trending(None).await?;
            serde_json::to_string_pretty(&trending)?
        }
    };

    println!("{}", output);

    Ok(())
}
