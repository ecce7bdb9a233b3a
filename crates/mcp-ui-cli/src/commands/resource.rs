//! Print a UI app resource

use mcp_ui::UiAppRegistry;

use crate::error::Result;

/// Run the resource command
pub fn run_resource(registry: &UiAppRegistry, uri: &str) -> Result<()> {
    let content = registry.read_resource(uri)?;
    println!("{}", serde_json::to_string_pretty(&content.to_read_result())?);
    Ok(())
}
