//! `photogen serve` - run the HTTP API
//!
//! Creates missing tables, then serves until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use photogen_server::completion::OpenAiClient;
use photogen_server::db;
use photogen_server::http::server::DEFAULT_MAX_UPLOAD_BYTES;
use photogen_server::{run_server, AppState, CompletionConfig, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(
        long,
        short = 'b',
        env = "PHOTOGEN_BIND",
        default_value = "127.0.0.1:8000"
    )]
    pub bind: SocketAddr,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Missing API key should stop us before any connection is made
    let completion_config =
        CompletionConfig::from_env().context("Completion service is not configured")?;
    let client = OpenAiClient::new(&completion_config)?;

    let (db_config, pool) = args.database.connect().await?;
    let tags = db::prepare(&pool, db_config.tags_storage)
        .await
        .context("Failed to create tables")?;

    tracing::info!(
        bind = %args.bind,
        model = client.model(),
        tags_storage = %tags.storage(),
        language = %completion_config.language,
        "Starting photogen server"
    );

    let state = AppState::new(pool, tags, Arc::new(client), completion_config.language);
    let config = ServerConfig {
        bind_addr: args.bind,
        max_upload_bytes: args.max_upload_bytes,
    };

    run_server(state, config).await.context("Server error")?;
    Ok(())
}
