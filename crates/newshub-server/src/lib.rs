//! Tech News Hub Server
//!
//! HTTP API for articles. Two binaries are built from this crate:
//! `newshub-memory` keeps articles in process memory, `newshub-pg`
//! stores them in PostgreSQL. Both share the router and handlers below.

pub mod config;
pub mod error;
pub mod handlers;
pub mod storage;
pub mod telemetry;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use newshub_core::ArticleStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::ApiError;

/// Which of the two services a router is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Memory,
    Postgres,
}

/// Application state shared across handlers
pub struct AppState<S> {
    pub store: Arc<S>,
    pub kind: ServiceKind,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            kind: self.kind,
        }
    }
}

/// Build the full HTTP router around `store`.
pub fn router<S: ArticleStore>(store: Arc<S>, kind: ServiceKind) -> Router {
    let state = AppState { store, kind };

    let mut app = Router::new()
        .route("/", get(handlers::index::<S>))
        .nest("/api", api_routes::<S>());

    if kind == ServiceKind::Postgres {
        app = app.route("/health", get(handlers::health));
    }

    app.fallback(handlers::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes<S: ArticleStore>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/articles",
            get(handlers::articles::list::<S>).post(handlers::articles::create::<S>),
        )
        .route(
            "/articles/:id",
            get(handlers::articles::get::<S>).delete(handlers::articles::delete::<S>),
        )
}

/// Bind the configured address and serve `app` until the process exits.
pub async fn serve(app: Router, config: &ServerConfig) -> Result<()> {
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server running on port {}", config.port);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
