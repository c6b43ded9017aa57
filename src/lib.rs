//! Newsdesk - Headline Search Engine
//!
//! A small search engine for news article feeds. Two independent
//! search strategies are provided:
//!
//! - **Substring scan**: exact substring matching over article titles
//!   and descriptions via Knuth-Morris-Pratt (worst-case linear, no
//!   precomputation; good for one-off interactive queries)
//! - **Word index**: a per-article prefix tree (trie) over title words,
//!   built once and queried many times, with snapshot persistence to a
//!   key-value store
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - search (KMP matcher, trie, article scanner)
//!   - index (word tokenization, per-article word index)
//!   - storage (key-value store, index snapshots)
//!   - feed (article source collaborator)
//!   - services (unified service container)
//!
//! - **cli**: command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Properties
//!
//! - Substring search is O(text + pattern) with no backtracking
//! - Word lookups are O(word length), independent of index size
//! - Indexes round-trip structurally through the key-value store;
//!   corrupt stored data surfaces as a load error, never a partial tree

// Core domain logic (protocol-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{NewsdeskError, Result};
pub use crate::core::index::WordIndex;
pub use crate::core::search::{kmp, Scanner, Trie};
pub use crate::core::services::Services;
pub use crate::core::types::*;
