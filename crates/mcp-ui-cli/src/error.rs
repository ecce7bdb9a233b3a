//! Error types for mcp-ui-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from mcp-ui
    #[error(transparent)]
    Registry(#[from] mcp_ui::Error),

    /// JSON output failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
