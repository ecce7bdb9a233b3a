//! List UI apps

use colored::Colorize;
use mcp_ui::UiAppRegistry;

use super::AppStatus;
use crate::error::Result;

/// Run the list command
pub fn run_list(registry: &UiAppRegistry, json: bool) -> Result<()> {
    let apps = registry.get_all_apps();

    if json {
        let statuses: Vec<AppStatus> = apps.iter().map(AppStatus::from).collect();
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    println!("{}", "UI Apps".bold());
    println!();

    for app in apps {
        let status = if app.html.is_loaded() {
            "loaded".green()
        } else {
            "unavailable".yellow()
        };
        println!(
            "  {:<20} {} ({})",
            app.config.id().cyan(),
            app.config.display_name(),
            status
        );
        println!("  {:<20} {}", "", app.config.tool_patterns().join(", ").dimmed());
    }

    let loaded = apps.iter().filter(|a| a.html.is_loaded()).count();
    println!();
    println!(
        "{} {} of {} UI apps loaded.",
        "Total:".dimmed(),
        loaded,
        apps.len()
    );

    Ok(())
}
