use clap::Parser;
use sona_orders::server::{self, AppState};
use sona_orders::utils::{logger, validation::Validate};
use sona_orders::{AppConfig, ShopifyClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    logger::init_server_logger(config.verbose);

    tracing::info!("Starting sona-orders API");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {e}");
        std::process::exit(1);
    }

    let state = AppState {
        orders: Arc::new(ShopifyClient::from_config(&config)),
    };

    server::serve(&config, state).await?;

    Ok(())
}
