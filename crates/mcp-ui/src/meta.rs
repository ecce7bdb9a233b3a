//! Tool response metadata
//!
//! After a tool call, the server attaches `_meta.ui.app` to the result when
//! the tool has a UI app whose asset loaded. Everything else on the result
//! (content, structured content, other `_meta` keys) is left untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::registry::{UiAppEntry, UiAppRegistry};

/// Key under `_meta` that carries UI app references
pub const UI_META_KEY: &str = "ui";

/// Result from a tool invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
    #[serde(rename = "_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// Content types for tool results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            ..Self::default()
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: Some(true),
            ..Self::text(message)
        }
    }

    /// Attach structured content alongside the text content
    pub fn with_structured_content(mut self, value: Value) -> Self {
        self.structured_content = Some(value);
        self
    }

    /// The `_meta.ui` object, if any.
    pub fn ui_meta(&self) -> Option<&Value> {
        self.meta.as_ref().and_then(|m| m.get(UI_META_KEY))
    }
}

impl UiAppEntry {
    /// `{"app": uri}` for a loaded app, `None` when the asset is unavailable.
    pub fn ui_meta(&self) -> Option<Value> {
        self.html().map(|_| json!({ "app": self.config.uri() }))
    }
}

/// Attach a UI app reference to `result`.
///
/// Does nothing unless `entry` is present and its asset loaded. An existing
/// `_meta.ui` object keeps its other keys; only `app` is set. Returns
/// whether metadata was attached.
pub fn attach_ui_meta(result: &mut ToolResult, entry: Option<&UiAppEntry>) -> bool {
    let Some(entry) = entry.filter(|e| e.html.is_loaded()) else {
        return false;
    };
    let uri = Value::from(entry.config.uri());

    let meta = result.meta.get_or_insert_with(Map::new);
    match meta.get_mut(UI_META_KEY) {
        Some(Value::Object(ui)) => {
            ui.insert("app".to_string(), uri);
        }
        _ => {
            meta.insert(UI_META_KEY.to_string(), json!({ "app": uri }));
        }
    }
    true
}

impl UiAppRegistry {
    /// Look up `tool_name` and attach its UI app reference to `result`.
    pub fn decorate_tool_result(&self, tool_name: &str, result: &mut ToolResult) -> bool {
        let attached = attach_ui_meta(result, self.get_app_for_tool(tool_name));
        if attached {
            tracing::debug!(tool = tool_name, "Attached UI app metadata");
        }
        attached
    }

    /// `_meta` for a `tools/list` entry: `{"ui": {"resourceUri": uri}}`.
    ///
    /// `None` when the tool has no app or the app's asset is unavailable.
    pub fn tool_definition_meta(&self, tool_name: &str) -> Option<Value> {
        let entry = self.get_app_for_tool(tool_name)?;
        entry.html()?;
        Some(json!({ UI_META_KEY: { "resourceUri": entry.config.uri() } }))
    }
}
