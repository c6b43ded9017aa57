//! Integration tests for the word index build path

use crate::common::fixtures;
use newsdesk::core::feed::{ArticleSource, JsonFeedSource};
use newsdesk::core::index::WordIndex;
use newsdesk::core::types::Article;

#[test]
fn test_build_then_lookup_scenario() {
    let articles = vec![Article::new("a", "cat sat")];
    let (index, _) = WordIndex::build(&articles);

    assert!(index.contains_word("a", "cat"));
    assert!(!index.contains_word("a", "ca"));
    assert!(!index.contains_word("a", "dog"));
}

#[test]
fn test_rebuild_with_shared_id_overwrites() {
    let (index, _) = WordIndex::build(&[
        Article::new("shared", "original words"),
        Article::new("shared", "replacement headline"),
    ]);

    assert!(!index.contains_word("shared", "original"));
    assert!(index.contains_word("shared", "replacement"));
}

#[test]
fn test_index_over_fixture_articles() {
    let articles = fixtures::sample_articles();
    let (index, stats) = WordIndex::build(&articles);

    assert_eq!(index.len(), 4);
    assert_eq!(stats.articles_indexed, 4);

    // Whole-word semantics: "rally" is a word, "rall" is not
    assert!(index.contains_word("https://example.com/markets", "rally"));
    assert!(!index.contains_word("https://example.com/markets", "rall"));

    // Descriptions are not indexed
    assert!(!index.contains_word("https://example.com/markets", "stocks"));

    // Words shared across articles
    assert_eq!(
        index.documents_containing("across"),
        vec!["https://example.com/weather"]
    );
}

#[tokio::test]
async fn test_feed_to_index_pipeline() {
    let (_dir, feed_path) = fixtures::write_feed();

    let articles = JsonFeedSource::new(&feed_path).fetch().await.unwrap();
    let (index, stats) = WordIndex::build(&articles);

    assert_eq!(stats.articles_indexed, 4);
    assert!(index.contains_word("https://example.com/sport", "championship"));
    assert!(index.contains_word("https://example.com/tech", "phones"));
    assert!(!index.contains_word("https://example.com/tech", "phone"));
}
