//! Store connection helpers.
//!
//! The catalog persists to either an embedded SQLite file or a networked
//! PostgreSQL instance; both go through sea-orm, so the backend choice is
//! entirely carried by the connection URL assembled in `core_config`.

use core_config::database::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{info, log::LevelFilter};

/// Connect to the store with pool settings tuned per backend.
///
/// SQLite is capped at a single connection: the embedded file takes a write
/// lock per statement, and `sqlite::memory:` would hand every pooled
/// connection its own private database.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);

    if database_url.starts_with("sqlite:") {
        opt.max_connections(1);
    } else {
        opt.max_connections(100).min_connections(5);
    }

    opt.connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    info!("Successfully connected to database at {}", database_url);

    Ok(db)
}

/// Connect using a [`DatabaseConfig`].
///
/// This is the recommended way to connect when using configuration.
///
/// # Example
/// ```ignore
/// use core_config::{FromEnv, database::DatabaseConfig};
///
/// let config = DatabaseConfig::from_env()?;
/// let db = database::connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    connect(&config.url).await
}
