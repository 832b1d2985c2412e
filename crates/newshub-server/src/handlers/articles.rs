//! Article handlers

use crate::{ApiError, AppState, ServiceKind};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use newshub_core::{ArticleError, ArticleStore, Draft};
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Serialize)]
pub struct DeleteResponse<A> {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    article: Option<A>,
}

fn parse_id<S: ArticleStore>(raw: &str) -> Result<S::Id, ApiError> {
    raw.parse::<S::Id>()
        .map_err(|_| ArticleError::InvalidId(raw.to_string()).into())
}

// Backend failures are logged here; not-found and bad input are not.
fn log_failure(action: &str, e: &ArticleError) {
    if let ArticleError::Backend(msg) = e {
        error!("Error {}: {}", action, msg);
    }
}

pub async fn list<S: ArticleStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<S::Article>>, ApiError> {
    let articles = state.store.list().await.map_err(|e| {
        log_failure("fetching articles", &e);
        ApiError::from(e)
    })?;

    Ok(Json(articles))
}

pub async fn get<S: ArticleStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<S::Article>, ApiError> {
    let id = parse_id::<S>(&id)?;

    let article = state.store.get(id).await.map_err(|e| {
        log_failure("fetching article", &e);
        ApiError::from(e)
    })?;

    Ok(Json(article))
}

pub async fn create<S: ArticleStore>(
    State(state): State<AppState<S>>,
    Json(draft): Json<S::Draft>,
) -> Result<(StatusCode, Json<S::Article>), ApiError> {
    draft.validate()?;

    let article = state.store.create(draft).await.map_err(|e| {
        log_failure("creating article", &e);
        ApiError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn delete<S: ArticleStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse<S::Article>>, ApiError> {
    let id = parse_id::<S>(&id)?;

    let article = state.store.delete(id).await.map_err(|e| {
        log_failure("deleting article", &e);
        ApiError::from(e)
    })?;
    info!("Deleted article {}", id);

    let response = match state.kind {
        ServiceKind::Memory => DeleteResponse {
            message: "Article deleted successfully",
            article: None,
        },
        ServiceKind::Postgres => DeleteResponse {
            message: "Article deleted",
            article: Some(article),
        },
    };

    Ok(Json(response))
}
