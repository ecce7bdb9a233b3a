//! Asset location settings
//!
//! The host decides where the UI build output lives. Settings default to
//! `ui-apps/dist` and can be overridden from the environment.

use std::path::PathBuf;

use tracing::warn;

/// Environment variable overriding the asset directory
pub const DIST_DIR_ENV: &str = "MCP_UI_DIST_DIR";

/// Environment variable overriding the per-asset size limit, in bytes
pub const MAX_ASSET_SIZE_ENV: &str = "MCP_UI_MAX_ASSET_SIZE";

/// Default asset directory, relative to the working directory
pub const DEFAULT_DIST_DIR: &str = "ui-apps/dist";

/// Maximum asset size (10 MB)
pub const DEFAULT_MAX_ASSET_SIZE: u64 = 10 * 1024 * 1024;

/// Where UI app assets are read from and how large they may be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    /// Directory holding one `{id}/index.html` per UI app
    pub dist_dir: PathBuf,
    /// Assets larger than this are treated as unreadable
    pub max_asset_size: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            max_asset_size: DEFAULT_MAX_ASSET_SIZE,
        }
    }
}

impl UiSettings {
    /// Create settings for a specific asset directory.
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            ..Self::default()
        }
    }

    /// Read settings from `MCP_UI_DIST_DIR` and `MCP_UI_MAX_ASSET_SIZE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Empty values are ignored. An unparsable size keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = lookup(DIST_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            settings.dist_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(MAX_ASSET_SIZE_ENV).filter(|v| !v.trim().is_empty()) {
            match raw.trim().parse::<u64>() {
                Ok(size) => settings.max_asset_size = size,
                Err(e) => {
                    warn!(
                        value = %raw,
                        "Ignoring invalid {}: {}",
                        MAX_ASSET_SIZE_ENV,
                        e
                    );
                }
            }
        }

        settings
    }
}
