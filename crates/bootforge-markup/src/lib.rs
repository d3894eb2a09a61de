//! # bootforge-markup
//!
//! HTML fragment rendering for the Bootforge widget ecosystem:
//! - plain-string tag builders over [`bootforge_core::Attributes`]
//! - the version-aware addon/input-group renderer
//!
//! Nothing here writes to an output stream; every function returns a
//! fragment string the host framework emits.

pub mod addon;
pub mod tag;

pub use addon::{addon_content, Addon, AddonContent, AddonItem, AddonSlot};
pub use tag::{encode, render_attributes, tag, void_tag};
