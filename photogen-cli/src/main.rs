//! photogen CLI - photo description service
//!
//! - `serve`: create missing tables and run the HTTP API
//! - `init-db`: create missing tables only

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use commands::{init_db::InitDbArgs, serve::ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "photogen",
    author,
    version,
    about = "Describe and tag photos with a multimodal completion API",
    propagate_version = true
)]
struct Cli {
    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Create database tables and exit
    InitDb(InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `env = ...` flags see values from .env files
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    for path in &env_files {
        tracing::info!("Loaded configuration from {}", path.display());
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::InitDb(args) => commands::run_init_db(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
