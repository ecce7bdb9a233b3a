//! Error types for mcp-ui

use std::path::PathBuf;

/// Result type alias for mcp-ui operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or serving UI app assets
///
/// Asset errors never escape [`UiAppRegistry::load`](crate::UiAppRegistry::load);
/// they are logged and turned into [`AppAsset::Unavailable`](crate::AppAsset).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset at {path} is too large ({size} bytes, limit is {limit} bytes)")]
    AssetTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("asset not found for UI app: {id}")]
    AssetNotFound { id: String },

    /// Unknown resource requested
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// Known UI app whose asset failed to load
    #[error("resource unavailable: {uri}")]
    ResourceUnavailable { uri: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
