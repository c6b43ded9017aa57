//! Integration tests for substring search (KMP + scanner)

use crate::common::fixtures;
use newsdesk::core::search::{kmp, Scanner};

#[test]
fn test_find_matches_spec_examples() {
    assert_eq!(kmp::find("the quick brown fox", "brown"), Some(10));
    assert_eq!(kmp::find("aaaa", "aaaaa"), None);
    assert_eq!(kmp::find("anything at all", ""), Some(0));
}

#[test]
fn test_scan_over_fixture_feed() {
    let articles = fixtures::sample_articles();
    let scanner = Scanner::new(false, 500);

    // Case-insensitive title substring
    let matches = scanner.scan(&articles, "RATE CUT").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].article.id, "https://example.com/markets");

    // Multi-article hit
    let matches = scanner.scan(&articles, "s").unwrap();
    assert!(matches.len() >= 3);

    // No hit
    assert!(scanner.scan(&articles, "election").unwrap().is_empty());
}

#[test]
fn test_scan_description_matches_carry_offsets() {
    let articles = fixtures::sample_articles();
    let scanner = Scanner::new(true, 500);

    // "announcement" appears only in descriptions
    let matches = scanner.scan(&articles, "announcement").unwrap();
    assert_eq!(matches.len(), 2);
    for m in &matches {
        assert!(m.title_offset.is_none());
        let offset = m.description_offset.expect("matched via description");
        let desc: Vec<char> = m
            .article
            .description
            .as_deref()
            .unwrap()
            .to_lowercase()
            .chars()
            .collect();
        let word: Vec<char> = "announcement".chars().collect();
        assert_eq!(&desc[offset..offset + word.len()], &word[..]);
    }
}

#[test]
fn test_scan_is_per_query_with_no_shared_state() {
    let articles = fixtures::sample_articles();
    let scanner = Scanner::new(false, 500);

    let first = scanner.scan(&articles, "rain").unwrap().len();
    let _ = scanner.scan(&articles, "chip").unwrap();
    let again = scanner.scan(&articles, "rain").unwrap().len();
    assert_eq!(first, again);
}
