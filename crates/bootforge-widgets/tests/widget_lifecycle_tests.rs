//! End-to-end tests for the widget lifecycle
//!
//! Tests cover:
//! - init: version resolution, option merging, id and destroy script
//! - plugin script generation against a script registry
//! - input-group rendering from widget state
//! - translation wiring through a module

use serde_json::json;

use bootforge_core::dependency;
use bootforge_core::version::ext_basename;
use bootforge_core::{AppParams, Attributes, BootstrapContract, CapabilityRegistry, HostEnv};
use bootforge_markup::{addon_content, Addon, AddonItem, AddonSlot};
use bootforge_widgets::{
    text_input, I18n, InputOptions, MessageSource, ModuleCore, ScriptPosition, ScriptRegistry,
    WidgetCore,
};

struct DatePicker;
impl BootstrapContract for DatePicker {}

struct Select2;
impl BootstrapContract for Select2 {}

fn env_with_versions(versions: &[u32]) -> HostEnv {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut caps = CapabilityRegistry::new();
    for &ver in versions {
        caps.register(dependency::qualify(&ext_basename(ver)));
    }
    HostEnv::new(AppParams::new(), caps)
}

#[test]
fn test_init_resolves_version_and_merges_options() {
    let mut env = env_with_versions(&[4]);
    env.params.set("bsVersion", "4.6.0");

    let mut core = WidgetCore::new("datepicker");
    core.default_options.add_class("form-control");
    core.default_options.set("autocomplete", "off");
    core.options.set("id", "dob");
    core.default_plugin_options = match json!({"autoclose": true, "format": "yyyy-mm-dd"}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    core.plugin_options = match json!({"format": "dd/mm/yyyy"}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };

    core.init::<DatePicker>(&env).unwrap();

    assert_eq!(core.bs_ver(), Some(4));
    assert_eq!(core.id(), Some("dob"));
    assert!(core.options.has_class("form-control"));
    assert_eq!(core.options.get("autocomplete"), Some("off"));
    assert_eq!(core.plugin_options["autoclose"], json!(true));
    assert_eq!(core.plugin_options["format"], json!("dd/mm/yyyy"));
    assert!(core
        .plugin_destroy_js
        .as_deref()
        .unwrap()
        .contains(".datepicker('destroy')"));
}

#[test]
fn test_init_fails_fast_when_companion_missing() {
    let env = env_with_versions(&[3]);
    let mut core = WidgetCore::new("datepicker");
    core.bs_version = Some("5.x".to_string());
    let err = core.init::<DatePicker>(&env).unwrap_err();
    assert!(err.to_string().contains("bootforge-bootstrap5"));
    assert_eq!(core.bs_ver(), None);
}

#[test]
fn test_full_script_round_trip() {
    let env = env_with_versions(&[4]);
    let mut core = WidgetCore::new("select2");
    core.bs_version = Some("4".to_string());
    core.options.set("id", "country");
    core.plugin_options = match json!({"width": "100%"}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    core.plugin_events
        .insert("change".to_string(), "function(){save();}".to_string());
    core.init::<Select2>(&env).unwrap();

    let mut scripts = ScriptRegistry::new();
    core.register_plugin(&mut scripts, None, None, None);

    let hash_var = core.hash_var().unwrap().to_string();
    let head = scripts.drain(ScriptPosition::Head);
    assert_eq!(head, vec![format!("var {hash_var} = {};\n", core.enc_options())]);

    let ready = scripts.drain(ScriptPosition::Ready);
    assert_eq!(ready.len(), 1);
    assert!(ready[0].contains(&format!("jQuery('#country').select2({hash_var});")));
    assert!(ready[0].contains("jQuery('#country').on('change', function(){save();});"));

    // The element carries the pointer back to the options variable
    assert_eq!(core.options.get("data-bootforge-select2"), Some(&*hash_var));
}

#[test]
fn test_input_group_composition() {
    let state = InputOptions {
        disabled: true,
        readonly: false,
    };
    let mut attrs = Attributes::new();
    attrs.add_class("form-control");
    state.init_disability(&mut attrs);

    let input = text_input("amount", Some("9.99"), &attrs);
    assert_eq!(
        input,
        "<input class=\"form-control\" type=\"text\" name=\"amount\" value=\"9.99\" disabled>"
    );

    let addon = Addon::new().prepend(AddonItem::new("$"));
    let group = format!(
        "<div class=\"input-group\">{}{input}</div>",
        addon_content(&addon, AddonSlot::Prepend, 4)
    );
    assert!(group.starts_with(
        "<div class=\"input-group\"><div class=\"input-group-prepend\">\
         <span class=\"input-group-text\">$</span></div><input"
    ));
}

#[test]
fn test_module_wires_translations_for_its_widgets() {
    let env = env_with_versions(&[5]);
    let mut i18n = I18n::new();
    let mut source = MessageSource::new("@fileinput/messages");
    source.add_message("fr", "Browse", "Parcourir");

    let mut module = ModuleCore::new("fileinput")
        .with_msg_category("fileinput")
        .with_bs_version("5.1");
    module.init(&env, &mut i18n, Some(source)).unwrap();

    assert_eq!(module.bs_ver(), Some(5));
    assert_eq!(i18n.translate("fileinput", "Browse", "fr-FR"), "Parcourir");
    assert_eq!(i18n.translate("fileinput", "Browse", "es"), "Browse");
}
