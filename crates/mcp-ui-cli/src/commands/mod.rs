//! Command implementations

mod list;
mod lookup;
mod resource;

pub use list::run_list;
pub use lookup::run_lookup;
pub use resource::run_resource;

use mcp_ui::UiAppEntry;
use serde::Serialize;

/// JSON view of one registry entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AppStatus {
    id: &'static str,
    display_name: &'static str,
    uri: &'static str,
    mime_type: &'static str,
    tool_patterns: &'static [&'static str],
    asset_loaded: bool,
}

impl From<&UiAppEntry> for AppStatus {
    fn from(entry: &UiAppEntry) -> Self {
        Self {
            id: entry.config.id(),
            display_name: entry.config.display_name(),
            uri: entry.config.uri(),
            mime_type: entry.config.mime_type(),
            tool_patterns: entry.config.tool_patterns(),
            asset_loaded: entry.html.is_loaded(),
        }
    }
}
