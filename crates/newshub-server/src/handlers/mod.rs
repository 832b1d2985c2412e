//! HTTP handlers

pub mod articles;

use crate::{ApiError, AppState, ServiceKind};
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use newshub_core::ArticleStore;
use serde_json::{json, Value};

/// Service banner with a map of the available endpoints.
pub async fn index<S: ArticleStore>(State(state): State<AppState<S>>) -> Json<Value> {
    Json(banner(state.kind))
}

fn banner(kind: ServiceKind) -> Value {
    match kind {
        ServiceKind::Memory => json!({
            "message": "🚀 Tech News Hub API is running!",
            "endpoints": {
                "getArticles": "GET /api/articles",
                "getArticle": "GET /api/articles/:id",
                "createArticle": "POST /api/articles",
                "deleteArticle": "DELETE /api/articles/:id"
            }
        }),
        ServiceKind::Postgres => json!({
            "message": "Tech News Hub API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "health": "/health",
                "articles": "/api/articles"
            }
        }),
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
