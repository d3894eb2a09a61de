//! Widget scaffolding
//!
//! [`WidgetCore`] carries the state every Bootforge widget shares: HTML
//! options layered over defaults, plugin options layered the same way, an
//! auto-generated element id, and the destroy script used when a widget
//! re-renders inside a dynamic container. Concrete widget types embed a
//! `WidgetCore` and call [`WidgetCore::init`] before rendering.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Map, Value};

use bootforge_core::{Attributes, BootstrapContract, HostEnv, Result, VersionResolver};

use crate::plugin::ScriptPosition;

/// JSON object type used for plugin options
pub type JsonMap = Map<String, Value>;

static WIDGET_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Next auto-generated widget element id (`w0`, `w1`, ...)
pub fn next_widget_id() -> String {
    format!("w{}", WIDGET_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Shared widget state and lifecycle
#[derive(Debug, Clone, Default)]
pub struct WidgetCore {
    /// Instance-level Bootstrap version override
    pub bs_version: Option<String>,
    /// Module identifier when the widget renders inside a module
    pub module_id: Option<String>,
    /// HTML attributes for the widget element
    pub options: Attributes,
    /// Default HTML attributes layered under [`Self::options`]
    pub default_options: Attributes,
    /// Name of the client plugin driving this widget
    pub plugin_name: String,
    /// Client plugin options
    pub plugin_options: JsonMap,
    /// Default plugin options layered under [`Self::plugin_options`]
    pub default_plugin_options: JsonMap,
    /// Client event handlers, event name to handler source
    pub plugin_events: BTreeMap<String, String>,
    /// Script run to tear the plugin down before re-initialization
    pub plugin_destroy_js: Option<String>,
    /// Where the hashed plugin-options variable is registered
    pub hash_var_load_position: ScriptPosition,
    pub(crate) bs_ver: Option<u32>,
    pub(crate) hash_var: Option<String>,
    pub(crate) data_var: Option<String>,
    pub(crate) enc_options: String,
}

impl BootstrapContract for WidgetCore {}

impl WidgetCore {
    /// Create widget state for a named client plugin
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            hash_var_load_position: ScriptPosition::Head,
            ..Self::default()
        }
    }

    /// Initialize the widget for rendering
    ///
    /// Resolves the Bootstrap version for the owning type `W`, layers
    /// defaults under the configured options, ensures an element id, and
    /// derives the destroy script. Must run before any script generation.
    pub fn init<W: BootstrapContract>(&mut self, env: &HostEnv) -> Result<()> {
        let resolver = self.resolver::<W>(env);
        self.bs_ver = Some(resolver.resolve()?);
        self.merge_defaults();
        self.ensure_id();
        self.init_destroy_js();
        Ok(())
    }

    /// Build the version resolver for the owning type `W`
    pub fn resolver<'e, W: BootstrapContract>(&self, env: &'e HostEnv) -> VersionResolver<'e> {
        let mut resolver = VersionResolver::for_widget::<W>(env);
        if let Some(version) = &self.bs_version {
            resolver = resolver.with_bs_version(version.clone());
        }
        resolver
    }

    /// The resolved Bootstrap major version, once [`Self::init`] has run
    pub fn bs_ver(&self) -> Option<u32> {
        self.bs_ver
    }

    /// The widget element id, if set
    pub fn id(&self) -> Option<&str> {
        self.options.get("id")
    }

    /// Ensure the widget has an element id, generating one when unset
    pub fn ensure_id(&mut self) -> String {
        if let Some(id) = self.options.get("id") {
            return id.to_string();
        }
        let id = next_widget_id();
        self.options.set("id", id.clone());
        id
    }

    /// jQuery selector expression for the widget element
    pub fn selector(&self) -> String {
        format!("jQuery('#{}')", self.id().unwrap_or_default())
    }

    /// Derive the default destroy script when none is configured
    pub fn init_destroy_js(&mut self) {
        if self.plugin_destroy_js.is_some() || self.plugin_name.is_empty() {
            return;
        }
        let el = self.selector();
        let plugin = &self.plugin_name;
        self.plugin_destroy_js = Some(format!(
            "if ({el}.data('{plugin}')) {{ {el}.{plugin}('destroy'); }}"
        ));
    }

    fn merge_defaults(&mut self) {
        self.options = Attributes::merged(&self.default_options, &self.options);
        self.plugin_options = merge_json_maps(&self.default_plugin_options, &self.plugin_options);
    }
}

/// Layer `overrides` on top of `defaults`, merging nested objects deeply
pub fn merge_json_maps(defaults: &JsonMap, overrides: &JsonMap) -> JsonMap {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(base)), Value::Object(over)) => {
                let deep = merge_json_maps(base, over);
                *base = deep;
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_ids_are_generated_and_sticky() {
        let mut core = WidgetCore::new("select2");
        let id = core.ensure_id();
        assert!(id.starts_with('w'));
        assert_eq!(core.ensure_id(), id);
    }

    #[test]
    fn test_explicit_id_preserved() {
        let mut core = WidgetCore::new("select2");
        core.options.set("id", "country");
        assert_eq!(core.ensure_id(), "country");
        assert_eq!(core.selector(), "jQuery('#country')");
    }

    #[test]
    fn test_destroy_js_defaulted_from_plugin_name() {
        let mut core = WidgetCore::new("datepicker");
        core.options.set("id", "dob");
        core.init_destroy_js();
        assert_eq!(
            core.plugin_destroy_js.as_deref(),
            Some("if (jQuery('#dob').data('datepicker')) { jQuery('#dob').datepicker('destroy'); }")
        );
    }

    #[test]
    fn test_destroy_js_not_overwritten() {
        let mut core = WidgetCore::new("datepicker");
        core.plugin_destroy_js = Some("custom();".to_string());
        core.init_destroy_js();
        assert_eq!(core.plugin_destroy_js.as_deref(), Some("custom();"));
    }

    #[test]
    fn test_no_destroy_js_without_plugin() {
        let mut core = WidgetCore::new("");
        core.init_destroy_js();
        assert!(core.plugin_destroy_js.is_none());
    }

    #[test]
    fn test_merge_json_maps_deep() {
        let defaults = as_map(json!({"theme": "classic", "ajax": {"delay": 250, "cache": true}}));
        let overrides = as_map(json!({"ajax": {"delay": 100}, "width": "100%"}));
        let merged = merge_json_maps(&defaults, &overrides);
        assert_eq!(
            Value::Object(merged),
            json!({"theme": "classic", "ajax": {"delay": 100, "cache": true}, "width": "100%"})
        );
    }
}
