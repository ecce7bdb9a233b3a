//! UI App Registry for the n8n MCP server
//!
//! This crate maps tool invocations to optional interactive UI apps. After a
//! tool runs, the server asks the registry whether a pre-built HTML bundle
//! exists for rendering the result and, if so, attaches a `_meta.ui`
//! reference to the response.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Server (tools/call) ]
//!        | get_app_for_tool(name)
//!        v
//! [ UiAppRegistry ] <-- load() --> [ AssetSource ]
//!        |                               |
//!        +--> [ UI_APP_CONFIGS ]         +--> [ ui-apps/dist/{id}/index.html ]
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use mcp_ui::{FsAssetSource, ToolResult, UiAppRegistry, UiSettings};
//!
//! let settings = UiSettings::from_env();
//! let mut registry = UiAppRegistry::new();
//! registry.load(&FsAssetSource::from_settings(&settings));
//!
//! let mut result = ToolResult::text("workflow created");
//! registry.decorate_tool_result("n8n_create_workflow", &mut result);
//! ```
//!
//! # Resources
//!
//! Every app with a loaded asset is also exposed as a read-only resource at
//! `n8n-mcp://ui/{id}` with MIME type `text/html;profile=mcp-app`.

pub mod app_configs;
pub mod asset;
pub mod config;
pub mod error;
pub mod meta;
pub mod registry;
pub mod resources;

pub use app_configs::{MCP_APP_MIME_TYPE, UI_APP_CONFIGS, UI_URI_PREFIX, UiAppConfig};
pub use asset::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use config::UiSettings;
pub use error::{Error, Result};
pub use meta::{ToolContent, ToolResult, UI_META_KEY, attach_ui_meta};
pub use registry::{AppAsset, LoadSummary, UiAppEntry, UiAppRegistry};
pub use resources::{ResourceContent, ResourceDefinition};
