// Test fixtures for integration testing

use newsdesk::core::types::Article;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small, realistic headline collection
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article::new("https://example.com/markets", "Markets rally on rate cut hopes")
            .with_description("Stocks climbed across the board after the announcement."),
        Article::new("https://example.com/weather", "Heavy rain expected across the coast")
            .with_description("A storm front is moving in overnight."),
        Article::new("https://example.com/sport", "Championship final goes to extra time"),
        Article::new("https://example.com/tech", "New chip promises faster phones")
            .with_description("The announcement sent rival shares down."),
    ]
}

/// A NewsAPI-shaped feed document matching `sample_articles`
pub const FEED_JSON: &str = r#"{
  "articles": [
    {
      "title": "Markets rally on rate cut hopes",
      "description": "Stocks climbed across the board after the announcement.",
      "url": "https://example.com/markets"
    },
    {
      "title": "Heavy rain expected across the coast",
      "description": "A storm front is moving in overnight.",
      "url": "https://example.com/weather"
    },
    {
      "title": "Championship final goes to extra time",
      "url": "https://example.com/sport"
    },
    {
      "title": "New chip promises faster phones",
      "description": "The announcement sent rival shares down.",
      "url": "https://example.com/tech"
    }
  ]
}"#;

/// Write the fixture feed into a temp dir, returning (dir, feed path)
#[allow(dead_code)] // Not every suite exercises the feed
pub fn write_feed() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feed.json");
    std::fs::write(&path, FEED_JSON).unwrap();
    (dir, path)
}
