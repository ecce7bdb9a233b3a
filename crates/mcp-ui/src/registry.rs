//! UI app registry
//!
//! Pairs each [`UiAppConfig`] with its loaded HTML and answers lookups by
//! tool name or app id.
//!
//! # Usage contract
//!
//! [`UiAppRegistry::load`] takes `&mut self` and is the only mutator; all
//! lookups take `&self` and perform no I/O. Load once during startup, then
//! share the registry (by reference or `Arc`) with request handlers. A host
//! that needs to reload while serving must put the registry behind its own
//! lock.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::app_configs::{UI_APP_CONFIGS, UiAppConfig};
use crate::asset::AssetSource;

/// Load state of a single app's HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAsset {
    /// Asset was read successfully
    Loaded(String),
    /// Asset was missing or could not be read
    Unavailable,
}

impl AppAsset {
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Loaded(html) => Some(html),
            Self::Unavailable => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// A UI app configuration paired with its (possibly absent) asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiAppEntry {
    pub config: &'static UiAppConfig,
    pub html: AppAsset,
}

impl UiAppEntry {
    /// Loaded HTML, or `None` when the asset is unavailable.
    pub fn html(&self) -> Option<&str> {
        self.html.html()
    }
}

/// Outcome counts of a [`UiAppRegistry::load`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub total: usize,
    pub loaded: usize,
    pub unavailable: usize,
}

/// Registry of UI apps and their assets.
///
/// Starts unloaded: every lookup returns `None` and [`get_all_apps`] is empty
/// until [`load`] has run.
///
/// [`get_all_apps`]: UiAppRegistry::get_all_apps
/// [`load`]: UiAppRegistry::load
#[derive(Debug, Clone)]
pub struct UiAppRegistry {
    configs: &'static [UiAppConfig],
    entries: Vec<UiAppEntry>,
    /// Tool pattern -> index into `entries`
    tool_index: HashMap<&'static str, usize>,
    loaded: bool,
}

impl Default for UiAppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UiAppRegistry {
    /// Create an unloaded registry over [`UI_APP_CONFIGS`].
    pub fn new() -> Self {
        Self::with_configs(UI_APP_CONFIGS)
    }

    /// Create an unloaded registry over a custom configuration table.
    pub fn with_configs(configs: &'static [UiAppConfig]) -> Self {
        Self {
            configs,
            entries: Vec::new(),
            tool_index: HashMap::new(),
            loaded: false,
        }
    }

    /// Resolve every configured app's asset and replace the current entries.
    ///
    /// Always produces exactly one entry per configuration, in table order.
    /// Missing or unreadable assets become [`AppAsset::Unavailable`]; no
    /// failure escapes this call.
    pub fn load<S: AssetSource + ?Sized>(&mut self, source: &S) -> LoadSummary {
        let configs = self.configs;
        let entries: Vec<UiAppEntry> = configs
            .iter()
            .map(|config| UiAppEntry {
                config,
                html: resolve_asset(config, source),
            })
            .collect();

        let mut tool_index = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            for pattern in entry.config.tool_patterns() {
                // First app in table order keeps the pattern
                tool_index.entry(*pattern).or_insert(idx);
            }
        }

        let loaded = entries.iter().filter(|e| e.html.is_loaded()).count();
        let summary = LoadSummary {
            total: entries.len(),
            loaded,
            unavailable: entries.len() - loaded,
        };

        self.entries = entries;
        self.tool_index = tool_index;
        self.loaded = true;

        info!(
            total = summary.total,
            loaded = summary.loaded,
            unavailable = summary.unavailable,
            "Loaded UI app registry"
        );

        summary
    }

    /// Whether [`load`](Self::load) has run at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Find the app that renders results of `tool_name`.
    ///
    /// Tool names match patterns by exact equality.
    pub fn get_app_for_tool(&self, tool_name: &str) -> Option<&UiAppEntry> {
        if !self.loaded {
            return None;
        }
        self.tool_index
            .get(tool_name)
            .and_then(|idx| self.entries.get(*idx))
    }

    /// Find an app by its configuration id.
    pub fn get_app_by_id(&self, id: &str) -> Option<&UiAppEntry> {
        if !self.loaded {
            return None;
        }
        self.entries.iter().find(|e| e.config.id() == id)
    }

    /// All entries in table order; empty before the first load.
    pub fn get_all_apps(&self) -> &[UiAppEntry] {
        &self.entries
    }
}

fn resolve_asset<S: AssetSource + ?Sized>(config: &UiAppConfig, source: &S) -> AppAsset {
    let id = config.id();

    if !source.exists(id) {
        debug!(app = id, "No UI asset found");
        return AppAsset::Unavailable;
    }

    match source.read(id) {
        Ok(html) => {
            debug!(app = id, bytes = html.len(), "Loaded UI asset");
            AppAsset::Loaded(html)
        }
        Err(e) => {
            warn!(app = id, "Failed to read UI asset: {}", e);
            AppAsset::Unavailable
        }
    }
}
