use core_config::{
    FromEnv, database::DatabaseConfig, pricing::PricingConfig, server::ServerConfig,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub pricing: PricingConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // SQLite unless DOCKER_ENV selects PostgreSQL
        let pricing = PricingConfig::from_env()?; // Defaults to http://localhost:5001
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=5000

        Ok(Self {
            database,
            pricing,
            server,
            environment,
        })
    }
}
