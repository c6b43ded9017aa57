//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent of the
//! presentation layer.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **search**: KMP substring matcher, trie, article scanner
//! - **index**: word tokenization and per-article word index
//! - **storage**: key-value store and index snapshot management
//! - **feed**: article source collaborator
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod feed;
pub mod index;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{NewsdeskError, Result};
pub use services::Services;
