//! Integration tests for persistence: file-backed store + snapshots

use crate::common::fixtures;
use newsdesk::core::error::NewsdeskError;
use newsdesk::core::index::WordIndex;
use newsdesk::core::storage::{
    JsonFileStore, KeyValueStore, SnapshotStore, SNAPSHOT_PREFIX, WORD_INDEX_KEY,
};
use std::sync::Arc;
use tempfile::TempDir;

fn file_backed_store(dir: &TempDir) -> SnapshotStore {
    let kv = Arc::new(JsonFileStore::new(dir.path().join("store.json")));
    SnapshotStore::new(kv)
}

#[test]
fn test_round_trip_preserves_every_lookup() {
    let dir = TempDir::new().unwrap();
    let store = file_backed_store(&dir);

    let articles = fixtures::sample_articles();
    let (index, _) = WordIndex::build(&articles);
    store.save(&index).unwrap();

    // Reopen through a fresh store instance: restoration must not
    // need the original articles
    let reopened = file_backed_store(&dir);
    let restored = reopened.load().unwrap().expect("saved index present");

    for article in &articles {
        for word in article.title.to_lowercase().split_whitespace() {
            assert_eq!(
                restored.contains_word(&article.id, word),
                index.contains_word(&article.id, word),
                "word {word:?} in {}",
                article.id
            );
        }
        // Prefixes stay non-words after restoration
        assert!(!restored.contains_word(&article.id, "ral"));
    }
    assert_eq!(restored, index);
}

#[test]
fn test_snapshot_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = file_backed_store(&dir);
    let (index, _) = WordIndex::build(&fixtures::sample_articles());

    let name = store.save_snapshot(&index).unwrap();
    assert!(name.starts_with(SNAPSHOT_PREFIX));

    let listed = store.list_snapshots().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, name);

    assert_eq!(store.load_snapshot(&name).unwrap(), index);

    store.delete_snapshot(&name).unwrap();
    assert!(store.list_snapshots().unwrap().is_empty());
    assert!(store
        .load_snapshot(&name)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_corrupt_value_fails_loudly_and_store_survives() {
    let dir = TempDir::new().unwrap();
    let kv = Arc::new(JsonFileStore::new(dir.path().join("store.json")));

    kv.set("unrelated", "value").unwrap();
    kv.set(WORD_INDEX_KEY, "[1, 2, {").unwrap();

    let store = SnapshotStore::new(Arc::clone(&kv) as Arc<dyn KeyValueStore>);
    let err = store.load().unwrap_err();
    assert!(matches!(err, NewsdeskError::SnapshotCorrupt { .. }));

    // The failed load did not disturb other keys
    assert_eq!(kv.get("unrelated").unwrap().as_deref(), Some("value"));
}

#[test]
fn test_save_overwrites_previous_index() {
    let dir = TempDir::new().unwrap();
    let store = file_backed_store(&dir);

    let (first, _) = WordIndex::build(&[newsdesk::core::types::Article::new("a", "cat sat")]);
    store.save(&first).unwrap();

    let (second, _) = WordIndex::build(&[newsdesk::core::types::Article::new("a", "dog ran")]);
    store.save(&second).unwrap();

    let restored = store.load().unwrap().unwrap();
    assert!(!restored.contains_word("a", "cat"));
    assert!(restored.contains_word("a", "dog"));
}
