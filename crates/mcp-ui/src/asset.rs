//! Asset sources for UI app HTML
//!
//! The registry only needs two primitives from its environment: an
//! existence check and a full text read, both keyed by app id.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_MAX_ASSET_SIZE, UiSettings};
use crate::{Error, Result};

/// File name of the bundled entry point inside each app directory
pub const ASSET_FILE_NAME: &str = "index.html";

/// Provider of UI app markup.
pub trait AssetSource {
    /// Whether an asset exists for the app `id`.
    fn exists(&self, id: &str) -> bool;

    /// Read the full asset for the app `id` as text.
    fn read(&self, id: &str) -> Result<String>;
}

/// Reads assets from `{dist_dir}/{id}/index.html`.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    dist_dir: PathBuf,
    max_asset_size: u64,
}

impl FsAssetSource {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            max_asset_size: DEFAULT_MAX_ASSET_SIZE,
        }
    }

    pub fn from_settings(settings: &UiSettings) -> Self {
        Self {
            dist_dir: settings.dist_dir.clone(),
            max_asset_size: settings.max_asset_size,
        }
    }

    /// Override the per-asset size limit.
    pub fn with_max_asset_size(mut self, limit: u64) -> Self {
        self.max_asset_size = limit;
        self
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Path the asset for `id` is expected at.
    pub fn asset_path(&self, id: &str) -> PathBuf {
        self.dist_dir.join(id).join(ASSET_FILE_NAME)
    }
}

impl AssetSource for FsAssetSource {
    fn exists(&self, id: &str) -> bool {
        self.asset_path(id).is_file()
    }

    fn read(&self, id: &str) -> Result<String> {
        read_file_bounded(&self.asset_path(id), self.max_asset_size)
    }
}

/// Read a file with a size limit so a runaway build artifact cannot exhaust memory.
///
/// The limit applies to the bytes actually read, so a file that grows after
/// the metadata check is still rejected.
fn read_file_bounded(path: &Path, limit: u64) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if metadata.len() > limit {
        return Err(Error::AssetTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    read_to_string_bounded(file, path, limit)
}

fn read_to_string_bounded(reader: impl Read, path: &Path, limit: u64) -> Result<String> {
    let mut content = String::new();
    let read = reader
        .take(limit.saturating_add(1))
        .read_to_string(&mut content)
        .map_err(|e| Error::io(path, e))?;
    if read as u64 > limit {
        return Err(Error::AssetTooLarge {
            path: path.to_path_buf(),
            size: read as u64,
            limit,
        });
    }
    Ok(content)
}

/// In-memory assets keyed by app id.
///
/// Useful for hosts that embed their UI bundles in the binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: HashMap<String, String>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the asset for `id`.
    pub fn with_asset(mut self, id: impl Into<String>, html: impl Into<String>) -> Self {
        self.assets.insert(id.into(), html.into());
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn exists(&self, id: &str) -> bool {
        self.assets.contains_key(id)
    }

    fn read(&self, id: &str) -> Result<String> {
        self.assets
            .get(id)
            .cloned()
            .ok_or_else(|| Error::AssetNotFound { id: id.to_string() })
    }
}
