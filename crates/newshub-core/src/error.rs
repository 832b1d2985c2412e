//! Error types for Tech News Hub

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArticleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Invalid article id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    Validation(String),

    /// Raw datastore error text, passed through to the client unchanged.
    #[error("{0}")]
    Backend(String),
}

impl ArticleError {
    pub fn backend(e: impl std::fmt::Display) -> Self {
        ArticleError::Backend(e.to_string())
    }
}
