//! Tech News Hub API, PostgreSQL edition
//!
//! Stateless: every request is forwarded to the `articles` table named by
//! `DATABASE_URL`.

use anyhow::{Context, Result};
use newshub_server::config::POSTGRES_DEFAULT_PORT;
use newshub_server::storage::Database;
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
    let config =
        ServerConfig::load(POSTGRES_DEFAULT_PORT).context("Failed to load configuration")?;
    telemetry::init(config.log_format)?;

    info!(
        "Starting Tech News Hub (PostgreSQL) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let db = Database::connect_lazy(
        config.require_database_url()?,
        config.db_max_connections,
    )
    .context("Failed to initialize database pool")?;
    let db = Arc::new(db);

    // Probe in the background so the listener comes up regardless.
    let probe = db.clone();
    tokio::spawn(async move {
        probe.probe().await;
    });

    let app = router(db, ServiceKind::Postgres);

    serve(app, &config).await
}
