//! Tech News Hub API, in-memory edition
//!
//! Articles live in process memory and reset to the welcome article on
//! every restart.

use anyhow::{Context, Result};
use newshub_server::config::MEMORY_DEFAULT_PORT;
use newshub_server::storage::MemoryStore;
use newshub_server::{router, serve, telemetry, ServerConfig, ServiceKind};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Server failed: {:#}", e);
        eprintln!("[FATAL] {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ServerConfig::load(MEMORY_DEFAULT_PORT).context("Failed to load configuration")?;
    telemetry::init(config.log_format)?;

    info!(
        "Starting Tech News Hub (in-memory) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = Arc::new(MemoryStore::new());
    let app = router(store, ServiceKind::Memory);

    serve(app, &config).await
}
