//! Config command - show effective configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Execute the show-config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    match format {
        OutputFormat::Json => output::print_output(config, format),
        OutputFormat::Human => {
            println!("{}", colors::label("Effective configuration"));
            println!("  Feed path:          {:?}", config.feed.path);
            println!("  Store path:         {:?}", config.storage.store_path);
            println!(
                "  Match descriptions: {}",
                config.search.match_descriptions
            );
            println!(
                "  Max query length:   {}",
                colors::number(&config.search.max_query_length.to_string())
            );
        }
    }

    Ok(())
}
