//! Index snapshot management.
//!
//! Owns the serialized shape of a [`WordIndex`] (a structural JSON
//! dump of every trie: char-keyed children plus end-of-word flags) and
//! the key naming inside the key-value store: one well-known key for
//! the current index, plus timestamp-suffixed named snapshots that can
//! be listed, reloaded, and deleted independently.
//!
//! Restoration is structural, not a re-derivation: loading a snapshot
//! reconstructs the exact tree shape without the original articles.

use crate::core::error::{NewsdeskError, Result};
use crate::core::index::WordIndex;
use crate::core::storage::kv::KeyValueStore;
use crate::core::types::SnapshotInfo;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Well-known key holding the current word index
pub const WORD_INDEX_KEY: &str = "word_index";

/// Prefix for named snapshot keys
pub const SNAPSHOT_PREFIX: &str = "word_index_";

/// Snapshot manager over a key-value store
pub struct SnapshotStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SnapshotStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Persist `index` under the well-known key
    pub fn save(&self, index: &WordIndex) -> Result<()> {
        let json = serde_json::to_string(index)?;
        self.kv.set(WORD_INDEX_KEY, &json)?;
        tracing::info!(key = WORD_INDEX_KEY, bytes = json.len(), "index saved");
        Ok(())
    }

    /// Load the current index, if one has been saved.
    ///
    /// Malformed stored data surfaces as [`NewsdeskError::SnapshotCorrupt`];
    /// it never yields a partial index.
    pub fn load(&self) -> Result<Option<WordIndex>> {
        match self.kv.get(WORD_INDEX_KEY)? {
            Some(json) => Ok(Some(Self::parse(WORD_INDEX_KEY, &json)?)),
            None => Ok(None),
        }
    }

    /// Persist `index` under a fresh timestamped name and return it
    pub fn save_snapshot(&self, index: &WordIndex) -> Result<String> {
        let name = format!("{SNAPSHOT_PREFIX}{}", Utc::now().timestamp_millis());
        let json = serde_json::to_string(index)?;
        self.kv.set(&name, &json)?;
        tracing::info!(key = %name, bytes = json.len(), "snapshot saved");
        Ok(name)
    }

    /// Load a named snapshot
    pub fn load_snapshot(&self, name: &str) -> Result<WordIndex> {
        let json = self
            .kv
            .get(name)?
            .ok_or_else(|| NewsdeskError::SnapshotNotFound(name.to_string()))?;
        Self::parse(name, &json)
    }

    /// List named snapshots (the well-known key is not a snapshot)
    pub fn list_snapshots(&self) -> Result<Vec<SnapshotInfo>> {
        let mut snapshots = Vec::new();

        for key in self.kv.list_keys()? {
            if !key.starts_with(SNAPSHOT_PREFIX) {
                continue;
            }
            let size_bytes = self.kv.get(&key)?.map(|v| v.len() as u64).unwrap_or(0);
            snapshots.push(SnapshotInfo {
                created_at: parse_timestamp(&key),
                name: key,
                size_bytes,
            });
        }

        Ok(snapshots)
    }

    /// Delete a named snapshot
    pub fn delete_snapshot(&self, name: &str) -> Result<()> {
        if self.kv.get(name)?.is_none() {
            return Err(NewsdeskError::SnapshotNotFound(name.to_string()));
        }
        self.kv.remove(name)?;
        tracing::info!(key = %name, "snapshot deleted");
        Ok(())
    }

    fn parse(key: &str, json: &str) -> Result<WordIndex> {
        serde_json::from_str(json).map_err(|e| NewsdeskError::SnapshotCorrupt {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse the millisecond timestamp suffix of a snapshot key
fn parse_timestamp(key: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = key.strip_prefix(SNAPSHOT_PREFIX)?.parse().ok()?;
    DateTime::from_timestamp_millis(millis)
}
