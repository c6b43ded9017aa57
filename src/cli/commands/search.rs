//! Search command - substring scan over the feed

use crate::cli::output::{self, colors, highlight_matches};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (matched as an exact substring, case-insensitive)
    pub query: String,

    /// Also match against article descriptions
    #[arg(long, short = 'd')]
    pub descriptions: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_offset: Option<usize>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let articles = services.source.fetch().await?;

    // --descriptions widens the configured scanner for this query only
    let scanner = if args.descriptions {
        crate::core::search::Scanner::new(true, services.config.search.max_query_length)
    } else {
        services.scanner.as_ref().clone()
    };

    let matches = scanner.scan(&articles, &args.query)?;

    let response = SearchResponseOutput {
        query: args.query.clone(),
        total_results: matches.len(),
        results: matches
            .iter()
            .enumerate()
            .map(|(i, m)| SearchResultItem {
                rank: i + 1,
                id: m.article.id.clone(),
                title: m.article.title.clone(),
                description: m.article.description.clone(),
                title_offset: m.title_offset,
                description_offset: m.description_offset,
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => output::print_output(&response, format),
        OutputFormat::Human => {
            if response.results.is_empty() {
                println!("No articles match {:?}", args.query);
                return Ok(());
            }

            println!(
                "{} {} of {} articles\n",
                colors::label("Matched"),
                colors::number(&response.total_results.to_string()),
                articles.len()
            );

            for item in &response.results {
                println!(
                    "{} {}",
                    colors::dim(&format!("{}.", item.rank)),
                    highlight_matches(&item.title, &args.query)
                );
                if let Some(desc) = &item.description {
                    println!("   {}", highlight_matches(desc, &args.query));
                }
                println!("   {}\n", colors::article_id(&item.id));
            }
        }
    }

    Ok(())
}
