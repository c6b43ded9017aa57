//! Lookup command - exact-word query against the persisted index

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::NewsdeskError;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the lookup command
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Word to look up (exact whole-word match, lowercased)
    pub word: String,

    /// Restrict the lookup to a single article id
    #[arg(long, short = 'a')]
    pub article: Option<String>,

    /// Query a named snapshot instead of the current index
    #[arg(long, short = 's')]
    pub snapshot: Option<String>,
}

/// Lookup response
#[derive(Debug, Serialize)]
pub struct LookupResponseOutput {
    pub word: String,
    pub source: String,
    pub articles: Vec<String>,
}

/// Execute the lookup command
pub async fn execute(
    args: LookupArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (index, source) = match &args.snapshot {
        Some(name) => (services.snapshots.load_snapshot(name)?, name.clone()),
        None => {
            let index = services.snapshots.load()?.ok_or_else(|| {
                NewsdeskError::IndexNotFound("run 'newsdesk index' first".to_string())
            })?;
            (index, "current".to_string())
        }
    };

    // Word lookups are lowercase by construction; fold the query too
    let word = args.word.to_lowercase();

    let articles: Vec<String> = match &args.article {
        Some(id) => {
            if index.contains_word(id, &word) {
                vec![id.clone()]
            } else {
                Vec::new()
            }
        }
        None => index
            .documents_containing(&word)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let response = LookupResponseOutput {
        word,
        source,
        articles,
    };

    match format {
        OutputFormat::Json => output::print_output(&response, format),
        OutputFormat::Human => {
            if response.articles.is_empty() {
                println!(
                    "No match for {:?} ({} article(s) indexed)",
                    response.word,
                    index.len()
                );
            } else {
                println!(
                    "{} {} article(s) contain {:?}:",
                    colors::label("Found"),
                    colors::number(&response.articles.len().to_string()),
                    response.word
                );
                for id in &response.articles {
                    println!("  {}", colors::article_id(id));
                }
            }
        }
    }

    Ok(())
}
