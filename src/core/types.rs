//! Core data types for the newsdesk service.
//!
//! This module defines the data structures shared across the
//! application: articles, scan matches, index statistics, and
//! snapshot metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article record
///
/// The `id` is a stable identifier distinct from the display title:
/// feeds that carry a URL use it, otherwise the title is the fallback.
/// Distinct articles that end up with the same id overwrite each other
/// in the word index (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Stable document identifier
    pub id: String,

    /// Display title (the only field that feeds the word index)
    pub title: String,

    /// Display description; opaque to the word index, but the
    /// substring scanner may match against it
    #[serde(default)]
    pub description: Option<String>,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A substring-scan hit on a single article
#[derive(Debug, Clone, Serialize)]
pub struct ArticleMatch<'a> {
    /// The matched article
    pub article: &'a Article,

    /// Char offset of the first occurrence in the original title.
    /// Matching case-folds per char, so the offset indexes the title
    /// as written.
    pub title_offset: Option<usize>,

    /// Char offset of the first occurrence in the original description
    pub description_offset: Option<usize>,
}

/// Statistics from a word-index build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of articles indexed
    pub articles_indexed: usize,

    /// Total words inserted across all tries
    pub words_inserted: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}

/// Metadata about a persisted index snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotInfo {
    /// Snapshot key in the store (e.g. `word_index_1724412345678`)
    pub name: String,

    /// Serialized size in bytes
    pub size_bytes: u64,

    /// Creation time parsed from the key suffix, when present
    pub created_at: Option<DateTime<Utc>>,
}
