//! Suppliers HTTP server
//!
//! Reads an optional YAML config from `SUPPLIERS_CONFIG`, seeds the
//! in-memory store and serves the supplier routes.

use suppliers::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    tracing::info!(
        seed = config.seed.len(),
        %addr,
        "Starting suppliers-rs v{}",
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::from_config(&config)
        .serve(&addr.to_string())
        .await
}
