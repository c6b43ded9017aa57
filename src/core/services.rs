//! Unified service container for newsdesk
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::feed::{ArticleSource, JsonFeedSource};
use crate::core::search::Scanner;
use crate::core::storage::{JsonFileStore, SnapshotStore};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Snapshot store over the configured key-value file
    pub snapshots: Arc<SnapshotStore>,

    /// Substring scanner configured from search settings
    pub scanner: Arc<Scanner>,

    /// Article source (feed file)
    pub source: Arc<dyn ArticleSource>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let kv = Arc::new(JsonFileStore::new(config.storage.store_path.clone()));
        let snapshots = Arc::new(SnapshotStore::new(kv));

        let scanner = Arc::new(Scanner::new(
            config.search.match_descriptions,
            config.search.max_query_length,
        ));

        let source: Arc<dyn ArticleSource> = Arc::new(JsonFeedSource::new(config.feed.path.clone()));

        Self {
            snapshots,
            scanner,
            source,
            config: Arc::new(config),
        }
    }
}
