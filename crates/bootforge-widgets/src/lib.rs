//! # bootforge-widgets
//!
//! Widget and module scaffolding for the Bootforge ecosystem:
//! - option merging, id generation, and destroy-script defaulting
//! - plugin-options hashing and client script generation
//! - input-widget support (disability flags, plugin language)
//! - translation source wiring and date-format conversion
//!
//! Everything here produces strings and attribute maps; emission into a
//! page is the host framework's job.

pub mod datefmt;
pub mod i18n;
pub mod input;
pub mod module;
pub mod plugin;
pub mod widget;

pub use datefmt::{convert_date_format, plugin_date_format};
pub use i18n::{short_lang, I18n, MessageSource};
pub use input::{init_language, text_input, InputOptions};
pub use module::ModuleCore;
pub use plugin::{ScriptPosition, ScriptRegistry};
pub use widget::{merge_json_maps, JsonMap, WidgetCore};
