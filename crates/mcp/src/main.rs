#![forbid(unsafe_code)]

mod entry;
mod server;
mod support;
mod tools;

pub(crate) use support::*;

use clap::Parser;
use std::path::PathBuf;
use tp_storage::SqliteStore;
use tracing_subscriber::EnvFilter;

const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "tripplanner-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server exposing the trip planner store as agent tools over stdio.
#[derive(Debug, Parser)]
#[command(name = "tp_mcp", version, about)]
struct Cli {
    /// Directory holding the SQLite store.
    #[arg(long, env = "TRIPPLAN_STORAGE_DIR", default_value = ".tripplanner")]
    storage_dir: PathBuf,

    /// Log filter, e.g. `info` or `tp_storage=debug`. Logs go to stderr.
    #[arg(long, env = "TRIPPLAN_LOG", default_value = "info")]
    log_level: String,
}

pub(crate) struct McpServer {
    initialized: bool,
    store: SqliteStore,
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the protocol.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let store = SqliteStore::open(&cli.storage_dir)?;
    tracing::info!(
        storage_dir = %cli.storage_dir.display(),
        version = SERVER_VERSION,
        "tripplanner mcp server starting"
    );

    let mut server = McpServer::new(store);
    let result = entry::run_stdio(&mut server);
    if let Err(err) = &result {
        tracing::error!(error = %err, "transport failed");
    }
    result
}
