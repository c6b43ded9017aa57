//! Per-article word index.

use crate::core::index::tokenizer;
use crate::core::search::Trie;
use crate::core::types::{Article, IndexStats};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// A mapping from article id to a trie over that article's title words.
///
/// Construction is the only way to populate an index (besides
/// deserializing a snapshot), so an index in hand is always fully
/// built. Duplicate article ids are last-write-wins: the later
/// article's trie replaces the earlier one entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordIndex {
    entries: BTreeMap<String, Trie>,
}

impl WordIndex {
    /// Build an index from an article collection.
    ///
    /// For each article the title is lowercased, split on whitespace,
    /// and every word inserted into a fresh trie keyed by the
    /// article's id. An empty collection yields an empty index.
    pub fn build(articles: &[Article]) -> (Self, IndexStats) {
        let start = Instant::now();
        let mut entries = BTreeMap::new();
        let mut words_inserted = 0;

        for article in articles {
            let mut trie = Trie::new();
            for word in tokenizer::words(&article.title) {
                trie.insert(&word);
                words_inserted += 1;
            }
            entries.insert(article.id.clone(), trie);
        }

        let stats = IndexStats {
            articles_indexed: articles.len(),
            words_inserted,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            articles = stats.articles_indexed,
            words = stats.words_inserted,
            duration_ms = stats.duration_ms,
            "word index built"
        );

        (Self { entries }, stats)
    }

    /// Exact-word lookup against one article's trie.
    ///
    /// An unknown article id answers false rather than erroring, same
    /// as a known article that lacks the word.
    pub fn contains_word(&self, article_id: &str, word: &str) -> bool {
        self.entries
            .get(article_id)
            .is_some_and(|trie| trie.search(word))
    }

    /// Ids of all articles whose title contains `word`
    pub fn documents_containing(&self, word: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, trie)| trie.search(word))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// True if `article_id` has an entry
    pub fn contains_document(&self, article_id: &str) -> bool {
        self.entries.contains_key(article_id)
    }

    /// Number of indexed articles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no article is indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Article;

    #[test]
    fn test_build_and_lookup() {
        let articles = vec![Article::new("a", "cat sat")];
        let (index, stats) = WordIndex::build(&articles);

        assert!(index.contains_word("a", "cat"));
        assert!(index.contains_word("a", "sat"));
        assert!(!index.contains_word("a", "ca")); // prefix, not a word
        assert!(!index.contains_word("a", "dog"));
        assert_eq!(stats.articles_indexed, 1);
        assert_eq!(stats.words_inserted, 2);
    }

    #[test]
    fn test_unknown_article_is_false_not_error() {
        let (index, _) = WordIndex::build(&[Article::new("a", "cat sat")]);
        assert!(!index.contains_word("missing", "cat"));
    }

    #[test]
    fn test_titles_are_lowercased() {
        let (index, _) = WordIndex::build(&[Article::new("a", "Breaking News Tonight")]);
        assert!(index.contains_word("a", "breaking"));
        assert!(index.contains_word("a", "news"));
        assert!(!index.contains_word("a", "Breaking"));
    }

    #[test]
    fn test_empty_collection_yields_empty_index() {
        let (index, stats) = WordIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(stats.articles_indexed, 0);
        assert_eq!(stats.words_inserted, 0);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let articles = vec![
            Article::new("a", "old headline"),
            Article::new("a", "new headline"),
        ];
        let (index, _) = WordIndex::build(&articles);

        assert_eq!(index.len(), 1);
        assert!(index.contains_word("a", "new"));
        assert!(!index.contains_word("a", "old")); // fully replaced
        assert!(index.contains_word("a", "headline"));
    }

    #[test]
    fn test_rebuild_replaces_previous_entries() {
        let first = vec![Article::new("a", "cat sat")];
        let (index, _) = WordIndex::build(&first);
        assert!(index.contains_word("a", "cat"));

        let second = vec![Article::new("a", "dog ran")];
        let (index, _) = WordIndex::build(&second);
        assert!(!index.contains_word("a", "cat"));
        assert!(index.contains_word("a", "dog"));
    }

    #[test]
    fn test_documents_containing() {
        let articles = vec![
            Article::new("a", "markets rally today"),
            Article::new("b", "rain expected today"),
            Article::new("c", "final tonight"),
        ];
        let (index, _) = WordIndex::build(&articles);

        assert_eq!(index.documents_containing("today"), vec!["a", "b"]);
        assert_eq!(index.documents_containing("tonight"), vec!["c"]);
        assert!(index.documents_containing("cricket").is_empty());
    }

    #[test]
    fn test_empty_title() {
        let (index, stats) = WordIndex::build(&[Article::new("a", "")]);
        assert!(index.contains_document("a"));
        assert!(!index.contains_word("a", ""));
        assert_eq!(stats.words_inserted, 0);
    }
}
