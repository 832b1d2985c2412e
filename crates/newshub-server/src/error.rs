//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newshub_core::ArticleError;
use serde_json::json;
use thiserror::Error;

/// Error returned by every handler
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Article(#[from] ArticleError),

    #[error("Route not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Article(ArticleError::NotFound) | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Article(ArticleError::InvalidId(_) | ArticleError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Article(ArticleError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
