//! Plugin-options hashing and client script generation
//!
//! Plugin options are JSON-encoded once, stored in a hashed page variable,
//! and referenced from the element through a `data-bootforge-{name}`
//! attribute. Identical option payloads across widget instances therefore
//! share one variable. Generated scripts are collected in a
//! [`ScriptRegistry`] per load position; the host framework drains the
//! registry and emits the scripts into the page.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::widget::WidgetCore;

/// Attribute-name prefix linking an element to its options variable
pub const DATA_ATTR_PREFIX: &str = "data-bootforge-";

/// Where a registered script is loaded in the page lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScriptPosition {
    /// In the document head
    #[default]
    Head,
    /// On document ready
    Ready,
    /// At the end of the body
    End,
}

/// Collected client scripts, per load position
#[derive(Debug, Clone, Default)]
pub struct ScriptRegistry {
    head: Vec<String>,
    ready: Vec<String>,
    end: Vec<String>,
}

impl ScriptRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a script at a load position
    pub fn register_js(&mut self, position: ScriptPosition, script: impl Into<String>) {
        self.bucket_mut(position).push(script.into());
    }

    /// Scripts registered at a position, in registration order
    pub fn scripts(&self, position: ScriptPosition) -> &[String] {
        match position {
            ScriptPosition::Head => &self.head,
            ScriptPosition::Ready => &self.ready,
            ScriptPosition::End => &self.end,
        }
    }

    /// Take all scripts registered at a position
    pub fn drain(&mut self, position: ScriptPosition) -> Vec<String> {
        std::mem::take(self.bucket_mut(position))
    }

    /// Whether nothing has been registered anywhere
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.ready.is_empty() && self.end.is_empty()
    }

    fn bucket_mut(&mut self, position: ScriptPosition) -> &mut Vec<String> {
        match position {
            ScriptPosition::Head => &mut self.head,
            ScriptPosition::Ready => &mut self.ready,
            ScriptPosition::End => &mut self.end,
        }
    }
}

/// Short content hash for a plugin-options payload
fn hash8(payload: &str) -> String {
    let digest = Sha256::digest(payload.as_bytes());
    hex::encode(digest)[..8].to_string()
}

impl WidgetCore {
    /// The hashed variable name, once options have been hashed
    pub fn hash_var(&self) -> Option<&str> {
        self.hash_var.as_deref()
    }

    /// The element data attribute name, once options have been hashed
    pub fn data_var(&self) -> Option<&str> {
        self.data_var.as_deref()
    }

    /// The JSON-encoded plugin options (empty until hashed)
    pub fn enc_options(&self) -> &str {
        &self.enc_options
    }

    /// Hash the plugin options into a page variable name
    ///
    /// Also sets `data-bootforge-{name}` on the widget options so client
    /// code can find the variable from the element.
    pub fn hash_plugin_options(&mut self, name: &str) {
        self.enc_options = if self.plugin_options.is_empty() {
            String::new()
        } else {
            serde_json::Value::Object(self.plugin_options.clone()).to_string()
        };
        let hash_var = format!("{name}_{}", hash8(&self.enc_options));
        let data_var = format!("{DATA_ATTR_PREFIX}{name}");
        self.options.set(&data_var, hash_var.clone());
        self.data_var = Some(data_var);
        self.hash_var = Some(hash_var);
    }

    /// Register the hashed plugin-options variable
    pub fn register_plugin_options(&mut self, name: &str, scripts: &mut ScriptRegistry) {
        self.hash_plugin_options(name);
        let enc = if self.enc_options.is_empty() {
            "{}"
        } else {
            self.enc_options.as_str()
        };
        let hash_var = self.hash_var.as_deref().unwrap_or_default();
        scripts.register_js(
            self.hash_var_load_position,
            format!("var {hash_var} = {enc};\n"),
        );
    }

    /// Build the plugin initialization script
    ///
    /// Registers the options variable as a side effect. `element` overrides
    /// the widget's own selector; `callback_con` is passed to the plugin
    /// constructor and `callback` runs once initialization settles. Event
    /// handlers from [`WidgetCore::plugin_events`] are appended.
    pub fn plugin_script(
        &mut self,
        scripts: &mut ScriptRegistry,
        element: Option<&str>,
        callback: Option<&str>,
        callback_con: Option<&str>,
    ) -> String {
        if self.plugin_name.is_empty() {
            return String::new();
        }
        let name = self.plugin_name.clone();
        let el = element
            .map(str::to_string)
            .unwrap_or_else(|| self.selector());
        self.register_plugin_options(&name, scripts);
        let hash_var = self.hash_var.as_deref().unwrap_or_default();
        let mut script = match callback_con {
            Some(con) => format!("{el}.{name}({hash_var}, {con})"),
            None => format!("{el}.{name}({hash_var})"),
        };
        if let Some(cb) = callback {
            script = format!("jQuery.when({script}).done({cb})");
        }
        script.push_str(";\n");
        for (event, handler) in &self.plugin_events {
            script.push_str(&format!("{el}.on('{event}', {handler});\n"));
        }
        script
    }

    /// Register the plugin initialization script at document-ready
    pub fn register_plugin(
        &mut self,
        scripts: &mut ScriptRegistry,
        element: Option<&str>,
        callback: Option<&str>,
        callback_con: Option<&str>,
    ) {
        let script = self.plugin_script(scripts, element, callback, callback_con);
        if !script.is_empty() {
            debug!(plugin = %self.plugin_name, "registered plugin script");
            scripts.register_js(ScriptPosition::Ready, script);
        }
    }
}
