//! Static UI app configuration table
//!
//! Every interactive UI app the server knows about is declared here. The
//! table is fixed at compile time; assets are resolved separately by
//! [`UiAppRegistry::load`](crate::UiAppRegistry::load).
//!
//! # Available Apps
//!
//! | ID | Tools |
//! |----|-------|
//! | `operation-result` | workflow create/update/delete/test/autofix, template deploy |
//! | `validation-summary` | node and workflow validation |

/// URI prefix shared by every UI app resource.
///
/// [`ui_app!`](crate::ui_app) repeats this literal because `concat!` only
/// accepts literals. Keep the two in sync.
pub const UI_URI_PREFIX: &str = "n8n-mcp://ui/";

/// MIME type for MCP App HTML resources
pub const MCP_APP_MIME_TYPE: &str = "text/html;profile=mcp-app";

/// Declare a [`UiAppConfig`] whose URI is derived from its id.
///
/// ```rust
/// static APP: mcp_ui::UiAppConfig = mcp_ui::ui_app! {
///     id: "execution-log",
///     display_name: "Execution Log",
///     description: "Timeline of a workflow execution",
///     tool_patterns: ["n8n_get_execution"],
/// };
/// assert_eq!(APP.uri(), "n8n-mcp://ui/execution-log");
/// ```
#[macro_export]
macro_rules! ui_app {
    (
        id: $id:literal,
        display_name: $display_name:literal,
        description: $description:literal,
        tool_patterns: [$($pattern:literal),+ $(,)?] $(,)?
    ) => {
        $crate::UiAppConfig::__from_parts(
            $id,
            $display_name,
            $description,
            concat!("n8n-mcp://ui/", $id),
            &[$($pattern),+],
        )
    };
}

/// Descriptor for one UI app.
///
/// Fields are private so that `uri` can only come from [`ui_app!`].
#[derive(Debug, PartialEq, Eq)]
pub struct UiAppConfig {
    id: &'static str,
    display_name: &'static str,
    description: &'static str,
    uri: &'static str,
    mime_type: &'static str,
    tool_patterns: &'static [&'static str],
}

impl UiAppConfig {
    #[doc(hidden)]
    pub const fn __from_parts(
        id: &'static str,
        display_name: &'static str,
        description: &'static str,
        uri: &'static str,
        tool_patterns: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            display_name,
            description,
            uri,
            mime_type: MCP_APP_MIME_TYPE,
            tool_patterns,
        }
    }

    /// Stable identifier, also the asset directory name
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Canonical address, always `n8n-mcp://ui/{id}`
    pub fn uri(&self) -> &'static str {
        self.uri
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn tool_patterns(&self) -> &'static [&'static str] {
        self.tool_patterns
    }

    /// Whether this app renders results of `tool_name`.
    ///
    /// Patterns match by exact string equality only.
    pub fn matches_tool(&self, tool_name: &str) -> bool {
        self.tool_patterns.contains(&tool_name)
    }
}

/// All UI apps, in lookup priority order.
pub static UI_APP_CONFIGS: &[UiAppConfig] = &[
    ui_app! {
        id: "operation-result",
        display_name: "Operation Result",
        description: "Visual summary of workflow operations (create, update, delete, test)",
        tool_patterns: [
            "n8n_create_workflow",
            "n8n_update_full_workflow",
            "n8n_update_partial_workflow",
            "n8n_delete_workflow",
            "n8n_test_workflow",
            "n8n_autofix_workflow",
            "n8n_deploy_template",
        ],
    },
    ui_app! {
        id: "validation-summary",
        display_name: "Validation Summary",
        description: "Visual summary of node and workflow validation results",
        tool_patterns: ["validate_node", "validate_workflow", "n8n_validate_workflow"],
    },
];
