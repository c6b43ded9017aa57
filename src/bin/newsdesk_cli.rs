//! Newsdesk CLI - command-line interface for headline search
//!
//! # Examples
//!
//! ```bash
//! # Substring search over the feed (no index needed)
//! newsdesk search "rate cut"
//!
//! # Build and persist the word index, keeping a snapshot
//! newsdesk index --snapshot
//!
//! # Exact-word lookup against the persisted index
//! newsdesk lookup markets
//!
//! # Manage snapshots
//! newsdesk list-snapshots
//! newsdesk delete-snapshot word_index_1724412345678
//! ```

use clap::Parser;
use newsdesk::cli::{output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsdesk=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
