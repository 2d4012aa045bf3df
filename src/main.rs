//! wreckstock entry point
//!
//! Loads configuration from the environment, builds the store client, and
//! starts the HTTP server. Anything failing here is startup-time
//! misconfiguration; request-time errors never reach main.

use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wreckstock::config::AppConfig;
use wreckstock::http_server::HttpServer;
use wreckstock::store::PostgrestStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "startup failed");
        eprintln!("{}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let store = Arc::new(PostgrestStore::new(&config.store)?);
    let server = HttpServer::with_config(config.http, store);
    server.start().await?;
    Ok(())
}
