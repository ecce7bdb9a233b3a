//! UI app resources
//!
//! Loaded UI apps are exposed as read-only MCP resources so hosts can fetch
//! the HTML referenced from a tool result's `_meta.ui.app`.
//!
//! | URI | Description | Content-Type |
//! |-----|-------------|--------------|
//! | `n8n-mcp://ui/{id}` | Bundled HTML for one UI app | text/html;profile=mcp-app |

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::registry::UiAppRegistry;
use crate::{Error, Result};

/// Resource definition for `resources/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// Resource content for `resources/read`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

impl ResourceContent {
    /// Wrap as a `resources/read` result body.
    pub fn to_read_result(&self) -> Value {
        json!({
            "contents": [{
                "uri": self.uri,
                "mimeType": self.mime_type,
                "text": self.text
            }]
        })
    }
}

impl UiAppRegistry {
    /// Resources for every app whose asset loaded, in table order.
    pub fn resource_definitions(&self) -> Vec<ResourceDefinition> {
        self.get_all_apps()
            .iter()
            .filter(|entry| entry.html.is_loaded())
            .map(|entry| ResourceDefinition {
                uri: entry.config.uri().to_string(),
                name: entry.config.display_name().to_string(),
                description: entry.config.description().to_string(),
                mime_type: entry.config.mime_type().to_string(),
            })
            .collect()
    }

    /// Read a UI app resource by URI.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownResource` if no app has this URI, and
    /// `Error::ResourceUnavailable` if the app's asset did not load.
    pub fn read_resource(&self, uri: &str) -> Result<ResourceContent> {
        let entry = self
            .get_all_apps()
            .iter()
            .find(|entry| entry.config.uri() == uri)
            .ok_or_else(|| Error::UnknownResource(uri.to_string()))?;

        let html = entry.html().ok_or_else(|| Error::ResourceUnavailable {
            uri: uri.to_string(),
        })?;

        Ok(ResourceContent {
            uri: entry.config.uri().to_string(),
            mime_type: entry.config.mime_type().to_string(),
            text: html.to_string(),
        })
    }
}
