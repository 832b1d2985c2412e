//! In-memory article store

use async_trait::async_trait;
use chrono::Utc;
use newshub_core::{Article, ArticleError, ArticleStore, NewArticle, Result};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Ordered list of articles, lost when the process exits
pub struct MemoryStore {
    articles: RwLock<Vec<Article>>,
}

impl MemoryStore {
    /// A store holding only the welcome article.
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(vec![Article::welcome()]),
        }
    }

    /// Drop everything and go back to the welcome article.
    pub async fn reset(&self) {
        let mut articles = self.articles.write().await;
        *articles = vec![Article::welcome()];
        info!("Article store reset");
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// Current time in milliseconds, bumped past `last` so ids never repeat
// when two articles are created within the same millisecond.
fn next_id(last: Option<i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match last {
        Some(last) if last >= now => last + 1,
        _ => now,
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    type Id = i64;
    type Article = Article;
    type Draft = NewArticle;

    async fn list(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Article> {
        self.articles
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(ArticleError::NotFound)
    }

    async fn create(&self, draft: NewArticle) -> Result<Article> {
        let mut articles = self.articles.write().await;

        let last = articles.iter().map(|a| a.id).max();
        let article = Article::new(next_id(last), draft);
        articles.push(article.clone());

        debug!("Created article {}", article.id);
        Ok(article)
    }

    async fn delete(&self, id: i64) -> Result<Article> {
        let mut articles = self.articles.write().await;

        let (removed, kept): (Vec<Article>, Vec<Article>) =
            articles.drain(..).partition(|a| a.id == id);
        *articles = kept;

        removed.into_iter().next().ok_or(ArticleError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn draft(title: &str) -> NewArticle {
        NewArticle {
            title: Some(title.to_string()),
            author: Some("Ada".to_string()),
            content: None,
        }
    }

    #[tokio::test]
    async fn test_seeded_with_welcome_article() {
        let store = MemoryStore::new();

        let articles = store.list().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, 1);
        assert_eq!(articles[0].title, "Welcome to Tech News Hub");
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryStore::new();

        let created = store.create(draft("Async Rust in practice")).await.unwrap();
        let fetched = assert_ok!(store.get(created.id).await);
        assert_eq!(fetched, created);

        // Appended after the seed, in insertion order
        let articles = store.list().await.unwrap();
        assert_eq!(articles.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_ids_unique_within_same_millisecond() {
        let store = MemoryStore::new();

        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(store.create(draft(&format!("burst {}", i))).await.unwrap().id);
        }

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        let created = store.create(draft("Short lived")).await.unwrap();

        let removed = store.delete(created.id).await.unwrap();
        assert_eq!(removed, created);
        assert_eq!(store.get(created.id).await, Err(ArticleError::NotFound));
        assert_eq!(store.len().await, 1);

        assert_err!(store.delete(created.id).await);
    }

    #[tokio::test]
    async fn test_delete_removes_every_match() {
        let store = MemoryStore::new();
        {
            let mut articles = store.articles.write().await;
            let dup = articles[0].clone();
            articles.push(dup);
        }

        assert_ok!(store.delete(1).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let store = MemoryStore::new();
        store.create(draft("One")).await.unwrap();
        store.create(draft("Two")).await.unwrap();
        store.delete(1).await.unwrap();

        store.reset().await;

        let articles = store.list().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, 1);
    }

    #[test]
    fn test_next_id() {
        let now = Utc::now().timestamp_millis();
        assert!(next_id(None) >= now);
        assert_eq!(next_id(Some(i64::MAX - 1)), i64::MAX);
        assert!(next_id(Some(1)) >= now);
    }
}
