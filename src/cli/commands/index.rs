//! Index command - build the word index from the feed and persist it

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::index::WordIndex;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Also save a timestamped snapshot alongside the current index
    #[arg(long, short = 's')]
    pub snapshot: bool,
}

/// Index response
#[derive(Debug, Serialize)]
pub struct IndexResponseOutput {
    pub articles_indexed: usize,
    pub words_inserted: usize,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
}

/// Execute the index command
pub async fn execute(
    args: IndexArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let articles = services.source.fetch().await?;

    let (index, stats) = WordIndex::build(&articles);

    services.snapshots.save(&index)?;
    let snapshot = if args.snapshot {
        Some(services.snapshots.save_snapshot(&index)?)
    } else {
        None
    };

    let response = IndexResponseOutput {
        articles_indexed: stats.articles_indexed,
        words_inserted: stats.words_inserted,
        duration_ms: stats.duration_ms,
        snapshot,
    };

    match format {
        OutputFormat::Json => output::print_output(&response, format),
        OutputFormat::Human => {
            output::print_success("Word index built and saved");
            println!(
                "  Articles: {}",
                colors::number(&response.articles_indexed.to_string())
            );
            println!(
                "  Words:    {}",
                colors::number(&response.words_inserted.to_string())
            );
            println!("  Took:     {}ms", response.duration_ms);
            if let Some(name) = &response.snapshot {
                println!("  Snapshot: {}", colors::article_id(name));
            }
        }
    }

    Ok(())
}
