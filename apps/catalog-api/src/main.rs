use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::{Migrator, MigratorTrait};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        "Environment: {}",
        if config.database.is_postgres() {
            "Docker (PostgreSQL)"
        } else {
            "Local (SQLite)"
        }
    );

    let db = database::connect_from_config(&config.database)
        .await
        .map_err(|e| eyre::eyre!("Database connection failed: {}", e))?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| eyre::eyre!("Database migration failed: {}", e))?;

    info!("Pricing service expected at {}", config.pricing.base_url);

    let router = api::router(&config, db);

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    Ok(())
}
