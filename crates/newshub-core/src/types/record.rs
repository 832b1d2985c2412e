//! Article types for the database-backed service

use super::require;
use crate::ports::Draft;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A row of the `articles` table
///
/// The table is owned by the database; every text column may be NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: i32,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Body of `POST /api/articles` for the database-backed service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewArticleRecord {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl Draft for NewArticleRecord {
    fn validate(&self) -> Result<()> {
        require("title", &self.title)
    }
}
