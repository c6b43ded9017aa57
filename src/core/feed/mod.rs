//! Article source collaborator.
//!
//! Supplies the article collection both search paths consume. The
//! trait is async because fetching is I/O (a feed file today, possibly
//! a wire service later); the search core itself stays synchronous.

use crate::core::error::{NewsdeskError, Result};
use crate::core::types::Article;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Source of article collections
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the current article collection
    async fn fetch(&self) -> Result<Vec<Article>>;
}

/// Raw article record as it appears in a NewsAPI-shaped feed
#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// NewsAPI-shaped feed document: `{ "articles": [...] }`
#[derive(Debug, Deserialize)]
struct Feed {
    articles: Vec<RawArticle>,
}

/// Reads a NewsAPI-shaped JSON feed from a local file.
///
/// Records without a title are skipped (nothing to index or display).
/// The stable id is the article URL when present, else the title.
/// Colliding ids collapse to one entry, last write wins (see
/// [`crate::core::index::WordIndex::build`]).
pub struct JsonFeedSource {
    path: PathBuf,
}

impl JsonFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleSource for JsonFeedSource {
    async fn fetch(&self) -> Result<Vec<Article>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            NewsdeskError::FeedFailed(format!("Cannot read feed {:?}: {e}", self.path))
        })?;

        let feed: Feed = serde_json::from_str(&contents).map_err(|e| {
            NewsdeskError::FeedFailed(format!("Feed {:?} is not valid JSON: {e}", self.path))
        })?;

        let total = feed.articles.len();
        let articles: Vec<Article> = feed
            .articles
            .into_iter()
            .filter_map(|raw| {
                let title = raw.title?;
                let id = raw.url.clone().unwrap_or_else(|| title.clone());
                Some(Article {
                    id,
                    title,
                    description: raw.description,
                })
            })
            .collect();

        if articles.len() < total {
            tracing::warn!(
                skipped = total - articles.len(),
                "feed records without a title were skipped"
            );
        }
        tracing::info!(count = articles.len(), path = ?self.path, "feed loaded");

        Ok(articles)
    }
}
