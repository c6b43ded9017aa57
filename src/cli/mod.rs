//! CLI adapter for newsdesk
//!
//! The only presentation layer: a clap adapter over `core/`. Commands
//! map one-to-one onto the two search paths (substring scan, word
//! index) plus snapshot management.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Newsdesk - Headline Search Engine
///
/// Search a news feed two ways: exact substring scan (KMP, no index)
/// or word lookup against a prebuilt per-article trie index that can
/// be persisted and snapshotted.
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(version)]
#[command(about = "Headline search engine", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Substring-search the feed (KMP scan, no index required)
    Search(commands::SearchArgs),

    /// Build the word index from the feed and persist it
    Index(commands::IndexArgs),

    /// Look up an exact word in the persisted index
    Lookup(commands::LookupArgs),

    /// List saved index snapshots
    #[command(name = "list-snapshots")]
    ListSnapshots(commands::snapshot::ListArgs),

    /// Delete a saved index snapshot
    #[command(name = "delete-snapshot")]
    DeleteSnapshot(commands::snapshot::DeleteArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.log_paths();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Index(args) => commands::index::execute(args, &services, cli.format).await,
        Commands::Lookup(args) => commands::lookup::execute(args, &services, cli.format).await,
        Commands::ListSnapshots(args) => {
            commands::snapshot::execute_list(args, &services, cli.format).await
        }
        Commands::DeleteSnapshot(args) => {
            commands::snapshot::execute_delete(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
    }
}
