//! Article types for the in-memory service

use super::{iso_millis, require};
use crate::ports::Draft;
use crate::Result;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// An article held in process memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Millisecond timestamp of creation, unique within the store
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub content: String,
}

impl Article {
    pub fn new(id: i64, draft: NewArticle) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            author: draft.author.unwrap_or_default(),
            date: now_millis(),
            content: draft.content.unwrap_or_default(),
        }
    }

    /// The record every fresh store starts with.
    pub fn welcome() -> Self {
        Self {
            id: 1,
            title: "Welcome to Tech News Hub".to_string(),
            author: "Isaac".to_string(),
            date: now_millis(),
            content: "Your source for the latest tech news and insights.".to_string(),
        }
    }
}

/// Body of `POST /api/articles` for the in-memory service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewArticle {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl Draft for NewArticle {
    fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("author", &self.author)
    }
}

// Stored at the precision it is serialized with, so a fetched article
// compares equal to the one returned on create.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArticleError;

    #[test]
    fn test_new_article_defaults_content() {
        let article = Article::new(
            42,
            NewArticle {
                title: Some("Rust 1.80 released".to_string()),
                author: Some("Ferris".to_string()),
                content: None,
            },
        );
        assert_eq!(article.id, 42);
        assert_eq!(article.content, "");
    }

    #[test]
    fn test_validate_requires_author() {
        let draft = NewArticle {
            title: Some("Untitled".to_string()),
            ..Default::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ArticleError::Validation("author is required".to_string()))
        );
    }

    #[test]
    fn test_date_serialized_with_millis() {
        let article = Article::welcome();
        let json = serde_json::to_value(&article).unwrap();
        let date = json["date"].as_str().unwrap();
        assert!(date.ends_with('Z'), "unexpected date format: {}", date);
        assert_eq!(date.len(), "2024-05-01T12:00:00.123Z".len());

        let parsed: Article = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, article);
    }

    #[test]
    fn test_missing_body_fields_deserialize_as_none() {
        let draft: NewArticle = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
        assert_eq!(draft.title.as_deref(), Some("Only a title"));
        assert!(draft.author.is_none());
        assert!(draft.content.is_none());
    }
}
