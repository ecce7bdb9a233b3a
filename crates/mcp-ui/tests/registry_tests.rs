//! UiAppRegistry load and lookup behaviour
//!
//! Uses a scripted asset source so that existence and read outcomes can be
//! controlled per test without touching the filesystem.

use std::cell::RefCell;
use std::collections::HashMap;

use mcp_ui::{AppAsset, AssetSource, Error, LoadSummary, UI_APP_CONFIGS, UiAppRegistry};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// What the scripted source answers for every id.
#[derive(Clone, Copy)]
enum Behaviour {
    Present(&'static str),
    Absent,
    ReadFails,
}

/// Asset source that records how often each primitive is called.
struct ScriptedSource {
    behaviour: Behaviour,
    exists_calls: RefCell<HashMap<String, usize>>,
    read_calls: RefCell<HashMap<String, usize>>,
}

impl ScriptedSource {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            exists_calls: RefCell::new(HashMap::new()),
            read_calls: RefCell::new(HashMap::new()),
        }
    }

    fn exists_count(&self, id: &str) -> usize {
        self.exists_calls.borrow().get(id).copied().unwrap_or(0)
    }

    fn read_count(&self, id: &str) -> usize {
        self.read_calls.borrow().get(id).copied().unwrap_or(0)
    }
}

impl AssetSource for ScriptedSource {
    fn exists(&self, id: &str) -> bool {
        *self.exists_calls.borrow_mut().entry(id.to_string()).or_default() += 1;
        !matches!(self.behaviour, Behaviour::Absent)
    }

    fn read(&self, id: &str) -> mcp_ui::Result<String> {
        *self.read_calls.borrow_mut().entry(id.to_string()).or_default() += 1;
        match self.behaviour {
            Behaviour::Present(html) => Ok(html.to_string()),
            Behaviour::Absent => Err(Error::AssetNotFound { id: id.to_string() }),
            Behaviour::ReadFails => Err(Error::io(
                format!("/dist/{}/index.html", id),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
            )),
        }
    }
}

fn loaded_registry(html: &'static str) -> UiAppRegistry {
    let mut registry = UiAppRegistry::new();
    registry.load(&ScriptedSource::new(Behaviour::Present(html)));
    registry
}

// ==========================================================================
// load()
// ==========================================================================

#[test]
fn load_stores_html_when_assets_exist() {
    let mut registry = UiAppRegistry::new();
    let summary = registry.load(&ScriptedSource::new(Behaviour::Present("<html>test</html>")));

    let apps = registry.get_all_apps();
    assert_eq!(apps.len(), UI_APP_CONFIGS.len());
    for app in apps {
        assert_eq!(app.html(), Some("<html>test</html>"));
    }
    assert_eq!(
        summary,
        LoadSummary {
            total: UI_APP_CONFIGS.len(),
            loaded: UI_APP_CONFIGS.len(),
            unavailable: 0,
        }
    );
}

#[test]
fn load_handles_missing_assets() {
    let mut registry = UiAppRegistry::new();
    let summary = registry.load(&ScriptedSource::new(Behaviour::Absent));

    let apps = registry.get_all_apps();
    assert_eq!(apps.len(), UI_APP_CONFIGS.len());
    for app in apps {
        assert_eq!(app.html, AppAsset::Unavailable);
    }
    assert_eq!(summary.unavailable, UI_APP_CONFIGS.len());
}

#[test]
fn load_handles_read_errors() {
    let mut registry = UiAppRegistry::new();
    let summary = registry.load(&ScriptedSource::new(Behaviour::ReadFails));

    let apps = registry.get_all_apps();
    assert_eq!(apps.len(), UI_APP_CONFIGS.len());
    for app in apps {
        assert!(app.html().is_none());
    }
    assert_eq!(summary.loaded, 0);
    assert!(registry.is_loaded());
}

#[test]
fn load_preserves_table_order() {
    let registry = loaded_registry("<html></html>");
    let ids: Vec<&str> = registry.get_all_apps().iter().map(|a| a.config.id()).collect();
    let expected: Vec<&str> = UI_APP_CONFIGS.iter().map(|c| c.id()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn load_calls_each_primitive_at_most_once_per_entry() {
    let source = ScriptedSource::new(Behaviour::Present("<html></html>"));
    let mut registry = UiAppRegistry::new();
    registry.load(&source);

    for config in UI_APP_CONFIGS {
        assert_eq!(source.exists_count(config.id()), 1);
        assert_eq!(source.read_count(config.id()), 1);
    }
}

#[test]
fn load_does_not_read_absent_assets() {
    let source = ScriptedSource::new(Behaviour::Absent);
    let mut registry = UiAppRegistry::new();
    registry.load(&source);

    for config in UI_APP_CONFIGS {
        assert_eq!(source.exists_count(config.id()), 1);
        assert_eq!(source.read_count(config.id()), 0);
    }
}

#[test]
fn reload_replaces_previous_entries() {
    let mut registry = loaded_registry("<html>v1</html>");

    registry.load(&ScriptedSource::new(Behaviour::Absent));
    assert_eq!(registry.get_all_apps().len(), UI_APP_CONFIGS.len());
    assert!(registry.get_all_apps().iter().all(|a| a.html().is_none()));

    registry.load(&ScriptedSource::new(Behaviour::Present("<html>v2</html>")));
    assert_eq!(registry.get_all_apps().len(), UI_APP_CONFIGS.len());
    assert!(
        registry
            .get_all_apps()
            .iter()
            .all(|a| a.html() == Some("<html>v2</html>"))
    );
}

// ==========================================================================
// get_app_for_tool()
// ==========================================================================

#[rstest]
#[case("n8n_create_workflow", "operation-result")]
#[case("n8n_update_full_workflow", "operation-result")]
#[case("n8n_update_partial_workflow", "operation-result")]
#[case("n8n_delete_workflow", "operation-result")]
#[case("n8n_test_workflow", "operation-result")]
#[case("n8n_autofix_workflow", "operation-result")]
#[case("n8n_deploy_template", "operation-result")]
#[case("validate_node", "validation-summary")]
#[case("validate_workflow", "validation-summary")]
#[case("n8n_validate_workflow", "validation-summary")]
fn known_tools_resolve(#[case] tool: &str, #[case] expected_id: &str) {
    let registry = loaded_registry("<html>loaded</html>");
    let entry = registry.get_app_for_tool(tool).expect("tool should resolve");
    assert_eq!(entry.config.id(), expected_id);
}

#[rstest]
#[case("get_node_info")]
#[case("unknown_tool")]
// Prefix and substring forms do not match
#[case("n8n_create_workflow_v2")]
#[case("create_workflow")]
#[case("validate")]
#[case("N8N_CREATE_WORKFLOW")]
#[case("")]
fn unknown_tools_do_not_resolve(#[case] tool: &str) {
    let registry = loaded_registry("<html>loaded</html>");
    assert!(registry.get_app_for_tool(tool).is_none());
}

#[test]
fn tool_lookup_before_load_returns_none() {
    let registry = UiAppRegistry::new();
    assert!(registry.get_app_for_tool("n8n_create_workflow").is_none());
}

#[test]
fn tool_lookup_resolves_even_when_asset_unavailable() {
    let mut registry = UiAppRegistry::new();
    registry.load(&ScriptedSource::new(Behaviour::Absent));

    let entry = registry.get_app_for_tool("n8n_create_workflow").unwrap();
    assert_eq!(entry.config.id(), "operation-result");
    assert!(entry.html().is_none());
}

// ==========================================================================
// get_app_by_id()
// ==========================================================================

#[test]
fn id_lookup_returns_entry() {
    let registry = loaded_registry("<html>app</html>");

    let entry = registry.get_app_by_id("operation-result").unwrap();
    assert_eq!(entry.config.display_name(), "Operation Result");
    assert_eq!(entry.html(), Some("<html>app</html>"));

    let entry = registry.get_app_by_id("validation-summary").unwrap();
    assert_eq!(entry.config.display_name(), "Validation Summary");
}

#[test]
fn id_lookup_unknown_returns_none() {
    let registry = loaded_registry("<html>app</html>");
    assert!(registry.get_app_by_id("nonexistent").is_none());
    assert!(registry.get_app_by_id("Operation-Result").is_none());
}

#[test]
fn id_lookup_before_load_returns_none() {
    assert!(UiAppRegistry::new().get_app_by_id("operation-result").is_none());
}

// ==========================================================================
// get_all_apps()
// ==========================================================================

#[test]
fn all_apps_after_load() {
    let mut registry = UiAppRegistry::new();
    registry.load(&ScriptedSource::new(Behaviour::Absent));

    let ids: Vec<&str> = registry.get_all_apps().iter().map(|a| a.config.id()).collect();
    assert_eq!(ids.len(), UI_APP_CONFIGS.len());
    assert!(ids.contains(&"operation-result"));
    assert!(ids.contains(&"validation-summary"));
}

#[test]
fn all_apps_empty_before_load() {
    let registry = UiAppRegistry::new();
    assert!(registry.get_all_apps().is_empty());
    assert!(!registry.is_loaded());
}

#[test]
fn entries_share_static_config() {
    let registry = loaded_registry("<html></html>");
    for (entry, config) in registry.get_all_apps().iter().zip(UI_APP_CONFIGS) {
        assert!(std::ptr::eq(entry.config, config));
    }
}
