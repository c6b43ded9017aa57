//! Storage layer: key-value persistence and index snapshots.
//!
//! # Architecture
//!
//! - **KeyValueStore**: the persistence collaborator surface
//!   (get/set/remove/list_keys over string keys and values)
//! - **JsonFileStore**: file-backed implementation (one JSON file)
//! - **MemoryStore**: in-memory implementation for tests and embedding
//! - **SnapshotStore**: owns the serialized index shape and key naming
//!
//! # Store layout
//!
//! ```text
//! word_index                  # current index (well-known key)
//! word_index_1724412345678    # named snapshots, millisecond-stamped
//! word_index_1724498745123
//! ```

mod kv;
mod snapshot;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use snapshot::{SnapshotStore, SNAPSHOT_PREFIX, WORD_INDEX_KEY};
