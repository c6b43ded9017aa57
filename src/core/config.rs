//! Configuration management for the newsdesk service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{NewsdeskError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Feed configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Path to the article feed file (NewsAPI-shaped JSON)
    #[serde(default = "default_feed_path")]
    pub path: PathBuf,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path to the key-value store file
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Also match article descriptions during substring scans
    #[serde(default)]
    pub match_descriptions: bool,

    /// Maximum query string length (characters)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_feed_path() -> PathBuf {
    PathBuf::from("./feed.json")
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data/store.json")
}

fn default_max_query_length() -> usize {
    500
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: default_feed_path(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_descriptions: false,
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| NewsdeskError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. NEWSDESK_CONFIG env var pointing at a file
    /// 2. XDG config file (~/.config/newsdesk/config.toml)
    /// 3. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("NEWSDESK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        // Anchor the store under the XDG data dir unless explicitly set
        if env::var("NEWSDESK_DATA_DIR").is_err() && config.storage.store_path == default_store_path()
        {
            config.storage.store_path = xdg.store_file();
        }

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(feed) = env::var("NEWSDESK_FEED") {
            self.feed.path = PathBuf::from(feed);
        }

        if let Ok(data_dir) = env::var("NEWSDESK_DATA_DIR") {
            self.storage.store_path = PathBuf::from(data_dir).join("store.json");
        }

        if let Ok(match_desc) = env::var("NEWSDESK_MATCH_DESCRIPTIONS") {
            if let Ok(b) = match_desc.parse() {
                self.search.match_descriptions = b;
            }
        }

        if let Ok(max_query_len) = env::var("NEWSDESK_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_query_length == 0 {
            return Err(NewsdeskError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.feed.path.as_os_str().is_empty() {
            return Err(NewsdeskError::ConfigError(
                "Feed path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration details
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Feed: {:?}", self.feed.path);
        tracing::info!("  Store: {:?}", self.storage.store_path);
        tracing::info!("  Match descriptions: {}", self.search.match_descriptions);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
    }
}
