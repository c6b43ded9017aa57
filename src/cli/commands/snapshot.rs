//! Snapshot commands - list and delete saved index snapshots

use crate::cli::output::{self, colors, format_bytes, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;

/// Arguments for snapshot list
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for snapshot delete
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Snapshot name (as shown by list-snapshots)
    pub name: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Snapshot list item
#[derive(Debug, Serialize)]
pub struct SnapshotListItem {
    pub name: String,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Snapshot list response
#[derive(Debug, Serialize)]
pub struct SnapshotListResponse {
    pub count: usize,
    pub snapshots: Vec<SnapshotListItem>,
}

/// Execute the list-snapshots command
pub async fn execute_list(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut snapshots = services.snapshots.list_snapshots()?;
    snapshots.sort_by(|a, b| a.name.cmp(&b.name));

    let response = SnapshotListResponse {
        count: snapshots.len(),
        snapshots: snapshots
            .iter()
            .map(|s| SnapshotListItem {
                name: s.name.clone(),
                size_bytes: s.size_bytes,
                created_at: s.created_at.map(|t| t.to_rfc3339()),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => output::print_output(&response, format),
        OutputFormat::Human => {
            if snapshots.is_empty() {
                println!("No saved snapshots. Run 'newsdesk index --snapshot' to create one.");
                return Ok(());
            }

            println!(
                "{} ({})\n",
                colors::label("Saved snapshots"),
                snapshots.len()
            );
            for snap in &snapshots {
                let age = snap
                    .created_at
                    .map(|t| format_relative_time(&t))
                    .unwrap_or_else(|| "unknown age".to_string());
                println!(
                    "  {}  {}  {}",
                    colors::article_id(&snap.name),
                    colors::number(&format_bytes(snap.size_bytes)),
                    colors::dim(&age)
                );
            }
        }
    }

    Ok(())
}

/// Execute the delete-snapshot command
pub async fn execute_delete(
    args: DeleteArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.force && format == OutputFormat::Human {
        print!(
            "Delete snapshot '{}'? This cannot be undone. [y/N] ",
            args.name
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    services.snapshots.delete_snapshot(&args.name)?;

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct DeleteResponse<'a> {
                deleted: &'a str,
            }
            output::print_output(&DeleteResponse { deleted: &args.name }, format);
        }
        OutputFormat::Human => {
            output::print_success(&format!("Deleted snapshot '{}'", args.name));
        }
    }

    Ok(())
}
