use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vocacional_api::config::ServerConfig;
use vocacional_api::server;

#[derive(Parser, Debug)]
#[command(name = "vocacional-api")]
#[command(about = "Vocational quiz scoring API", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Listening port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ServerConfig::from_env(cli.port)?;
    let addr = config.bind_addr()?;

    let service = server::shared_service();
    let app = server::router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "vocacional-api listening");

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;
    Ok(())
}

/// Respects `RUST_LOG` when set; otherwise `info`, or `debug` with
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
