//! CLI entry point - the composition root.
//!
//! The client and store are constructed once here and passed down;
//! nothing else in the workspace touches process configuration.

mod commands;
mod parser;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use aria_api::{ApiClientConfig, ApiError, ApiResult, DefaultAriaClient};
use aria_core::SystemClock;
use aria_core::paths;
use aria_store::DownloadStateStore;

use commands::{Commands, SearchKind};
use parser::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = ApiClientConfig::new().with_endpoints_file(paths::endpoints_file_path()?);
    let client = DefaultAriaClient::new(config);
    let store = DownloadStateStore::open(paths::state_file_path()?, Arc::new(SystemClock));

    match cli.command {
        Commands::Search { query, kind } => {
            let result = match kind {
                SearchKind::Tracks => client.search_tracks(&query).await,
                SearchKind::Albums => client.search_albums(&query).await,
                SearchKind::Artists => client.search_artists(&query).await,
            };
            print_result(result)?;
        }
        Commands::Track { id, quality } => {
            print_result(client.get_track(id, quality.into()).await)?;
        }
        Commands::Album { id } => {
            print_result(client.get_album(id).await)?;
        }
        Commands::AlbumTracks { id } => {
            print_result(client.get_album_tracks(id).await)?;
        }
        Commands::Artist { id } => {
            print_result(client.get_artist(id).await)?;
        }
        Commands::Status { id } => match store.get(id) {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => println!("no tracked download for item {id}"),
        },
        Commands::Downloads => {
            let snapshot = serde_json::json!({
                "active": store.list_active(),
                "completed": store.list_completed(),
                "failed": store.list_failed(),
            });
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Commands::Clear { id } => {
            store.clear(id);
            println!("cleared item {id}");
        }
        Commands::Endpoints => {
            for endpoint in client.registry().endpoints() {
                println!(
                    "{:>10}  priority {}  {}",
                    endpoint.name, endpoint.priority, endpoint.base_url
                );
            }
        }
        Commands::Paths => {
            println!("data root:      {}", paths::data_root()?.display());
            println!("state file:     {}", store.path().display());
            println!("endpoints file: {}", paths::endpoints_file_path()?.display());
            println!("music dir:      {}", paths::music_dir()?.display());
        }
    }

    Ok(())
}

/// Print an API result; pool exhaustion is an expected outcome, not an
/// error exit.
fn print_result(result: ApiResult<serde_json::Value>) -> Result<()> {
    match result {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(ApiError::NoEndpointAvailable { operation }) => {
            eprintln!("all mirrors are currently unavailable ({operation}); try again shortly");
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}
