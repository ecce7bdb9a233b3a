//! Resolve a tool name to its UI app

use colored::Colorize;
use mcp_ui::{ToolResult, UiAppRegistry};
use serde_json::json;

use super::AppStatus;
use crate::error::Result;

/// Run the lookup command
///
/// An unmatched tool is a normal outcome, not an error.
pub fn run_lookup(registry: &UiAppRegistry, tool: &str, json: bool) -> Result<()> {
    let entry = registry.get_app_for_tool(tool);

    if json {
        // Show exactly what a tool result would carry
        let mut result = ToolResult::default();
        registry.decorate_tool_result(tool, &mut result);
        let output = json!({
            "tool": tool,
            "app": entry.map(AppStatus::from),
            "meta": result.meta,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match entry {
        Some(app) if app.html.is_loaded() => {
            println!(
                "{} {} -> {} ({})",
                "ui:".green().bold(),
                tool,
                app.config.id().cyan(),
                app.config.uri()
            );
        }
        Some(app) => {
            println!(
                "{} {} -> {} (asset unavailable, no metadata attached)",
                "ui:".yellow().bold(),
                tool,
                app.config.id().cyan()
            );
        }
        None => {
            println!("{} no UI app for {}", "ui:".dimmed(), tool);
        }
    }

    Ok(())
}
