//! `photogen init-db` - create tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;
use photogen_server::db;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let (config, pool) = args.database.connect().await?;

    let codec = db::prepare(&pool, config.tags_storage)
        .await
        .context("Failed to create tables")?;

    println!("Tables ready (tags stored as {})", codec.storage());
    pool.close().await;
    Ok(())
}
