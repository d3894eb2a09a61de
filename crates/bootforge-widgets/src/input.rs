//! Input-widget support
//!
//! Helpers shared by form input widgets: propagating disabled/readonly
//! state into the element attributes, seeding the client plugin's language
//! option, and building the bare input element an input-group wraps.

use serde_json::Value;

use bootforge_core::Attributes;
use bootforge_markup::void_tag;

use crate::i18n::short_lang;
use crate::widget::JsonMap;

/// Disabled/readonly state for an input widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Whether the input is disabled
    pub disabled: bool,
    /// Whether the input is readonly
    pub readonly: bool,
}

impl InputOptions {
    /// Apply the flags to the element attributes
    ///
    /// Flags already present in the attribute map are left untouched so a
    /// caller-provided value always wins.
    pub fn init_disability(&self, options: &mut Attributes) {
        if self.disabled && !options.contains("disabled") {
            options.set_flag("disabled", true);
        }
        if self.readonly && !options.contains("readonly") {
            options.set_flag("readonly", true);
        }
    }
}

/// Seed the plugin's language option from the widget language
///
/// Only applies when the option is unset and the short language code is not
/// English (plugins ship English strings by default). `full` selects the
/// full locale (`fr-FR`) over the short code (`fr`).
pub fn init_language(plugin_options: &mut JsonMap, property: &str, language: &str, full: bool) {
    let lang = short_lang(language);
    let unset = match plugin_options.get(property) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if unset && lang != "en" {
        let value = if full { language.to_string() } else { lang };
        plugin_options.insert(property.to_string(), Value::String(value));
    }
}

/// Build a text input element for input-group composition
pub fn text_input(name: &str, value: Option<&str>, options: &Attributes) -> String {
    let mut base = Attributes::new();
    base.set("type", "text").set("name", name);
    if let Some(value) = value {
        base.set("value", value);
    }
    void_tag("input", &Attributes::merged(&base, options))
}
