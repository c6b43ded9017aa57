//! Key-value persistence collaborator.
//!
//! String keys to string values, nothing more. The snapshot layer
//! above decides what the values mean; implementations here only move
//! bytes.

use crate::core::error::{NewsdeskError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The persistence collaborator surface
pub trait KeyValueStore: Send + Sync {
    /// Read a value; absent keys are `None`, not an error
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is a no-op
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently present
    fn list_keys(&self) -> Result<Vec<String>>;
}

/// File-backed store: the whole map lives in one JSON file.
///
/// Writes serialize the full map to a sibling temp file and rename it
/// into place, so a failed write leaves the previous file intact. A
/// missing file reads as an empty store; a present-but-unparseable
/// file is a storage error, not an empty store.
pub struct JsonFileStore {
    path: PathBuf,
    // Guards read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|e| {
            NewsdeskError::StorageError(format!(
                "Store file {:?} is not valid JSON: {e}",
                self.path
            ))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().expect("store lock poisoned");
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().expect("store lock poisoned");
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().expect("store lock poisoned");
        let mut map = self.read_map()?;
        map.remove(key);
        self.write_map(&map)
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let _guard = self.lock.lock().expect("store lock poisoned");
        Ok(self.read_map()?.into_keys().collect())
    }
}

/// In-memory store for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.lock().expect("store lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.map
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.map.lock().expect("store lock poisoned").remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self
            .map
            .lock()
            .expect("store lock poisoned")
            .keys()
            .cloned()
            .collect())
    }
}
