//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MCP UI - Inspect which UI apps are available for MCP tools
#[derive(Parser, Debug)]
#[command(name = "mcp-ui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing `{id}/index.html` UI bundles
    #[arg(long, global = true, env = "MCP_UI_DIST_DIR")]
    pub dist_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every UI app and whether its asset loaded
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show which UI app renders a tool's result
    ///
    /// Examples:
    ///   mcp-ui lookup n8n_create_workflow
    ///   mcp-ui lookup validate_node --json
    Lookup {
        /// Tool name, matched exactly
        tool: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the resources/read payload for a UI app URI
    Resource {
        /// Resource URI, e.g. n8n-mcp://ui/operation-result
        uri: String,
    },
}
