//! Command implementations for the photogen CLI

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use photogen_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS, PgPool};
use photogen_server::DatabaseConfig;

/// Connection flags shared by every command that touches Postgres
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides DB_HOST/DB_PORT/DB_USER/DB_PASSWORD/DB_NAME)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve settings from flags and environment, then open the pool.
    pub async fn connect(&self) -> Result<(DatabaseConfig, PgPool)> {
        let config = DatabaseConfig::from_env()?.with_url(self.database_url.clone());
        let pool = create_pool_with_options(config.connect_options()?, self.max_connections)
            .await
            .context("Failed to create database pool")?;
        Ok((config, pool))
    }
}
