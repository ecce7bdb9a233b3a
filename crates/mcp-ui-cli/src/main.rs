//! MCP UI CLI
//!
//! Inspect the UI app registry the MCP server would build: which apps exist,
//! whether their bundles load, and which app a tool resolves to.
//!
//! # Environment Variables
//!
//! - `MCP_UI_DIST_DIR`: Directory holding the UI bundles (default: `ui-apps/dist`)
//! - `MCP_UI_MAX_ASSET_SIZE`: Per-asset size limit in bytes

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use mcp_ui::{FsAssetSource, UiAppRegistry, UiSettings};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing subscriber already set", "warning:".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let mut settings = UiSettings::from_env();
    if let Some(dir) = cli.dist_dir {
        settings.dist_dir = dir;
    }
    tracing::debug!(dist_dir = ?settings.dist_dir, "Loading UI apps");

    let mut registry = UiAppRegistry::new();
    registry.load(&FsAssetSource::from_settings(&settings));

    execute_command(&registry, cli.command)
}

fn execute_command(registry: &UiAppRegistry, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { json } => commands::run_list(registry, json),
        Commands::Lookup { tool, json } => commands::run_lookup(registry, &tool, json),
        Commands::Resource { uri } => commands::run_resource(registry, &uri),
    }
}
