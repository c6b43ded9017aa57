//! CLI command implementations
//!
//! One module per command, each exposing a clap `Args` struct and an
//! `execute` function taking the shared services container.

pub mod config;
pub mod index;
pub mod lookup;
pub mod search;
pub mod snapshot;

pub use config::ConfigArgs;
pub use index::IndexArgs;
pub use lookup::LookupArgs;
pub use search::SearchArgs;
