//! Storage trait for article persistence

use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// A request body that creates an article once validated.
pub trait Draft: DeserializeOwned + Send + 'static {
    /// Reject drafts missing required fields.
    fn validate(&self) -> Result<()>;
}

/// Article store
///
/// Both services implement this: the in-memory list and the PostgreSQL
/// table. HTTP handlers are written once against it.
#[async_trait]
pub trait ArticleStore: Send + Sync + 'static {
    type Id: FromStr + Display + Copy + Send + Sync + 'static;
    type Article: Serialize + Send + 'static;
    type Draft: Draft;

    /// All articles, in the store's natural order.
    async fn list(&self) -> Result<Vec<Self::Article>>;

    /// Fails with `ArticleError::NotFound` if no article has `id`.
    async fn get(&self, id: Self::Id) -> Result<Self::Article>;

    async fn create(&self, draft: Self::Draft) -> Result<Self::Article>;

    /// Removes the article and returns it. Fails with
    /// `ArticleError::NotFound` if nothing was removed.
    async fn delete(&self, id: Self::Id) -> Result<Self::Article>;
}
