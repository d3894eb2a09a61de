//! Version-aware CSS class mapping
//!
//! The table below maps semantic style concepts to the class names each
//! Bootstrap major version uses for them. Every entry holds one to three
//! variants: index 0 is the version-3 rendering, index 1 version 4, index 2
//! version 5. A version past an entry's length reuses the last available
//! variant, so versions 4 and 5 share one slot unless an entry carries a
//! version-5-specific override. Unknown concepts degrade to the empty
//! string; not every concept applies to every consumer.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::attrs::Attributes;
use crate::error::Result;
use crate::version::{VersionResolver, DEFAULT_BS_VERSION};

static BS_CSS_ENTRIES: &[(&str, &[&str])] = &[
    ("badge", &["label", "badge"]),
    (
        "badge-default",
        &["label label-default", "badge badge-secondary", "badge bg-secondary"],
    ),
    ("btn-default", &["btn btn-default", "btn btn-outline-secondary"]),
    ("checkbox", &["checkbox", "form-check"]),
    ("close", &["close", "close", "btn-close"]),
    ("dropdown-divider", &["divider", "dropdown-divider"]),
    ("float-left", &["pull-left", "float-left", "float-start"]),
    ("float-right", &["pull-right", "float-right", "float-end"]),
    ("form-control-static", &["form-control-static", "form-control-plaintext"]),
    ("help-block", &["help-block", "form-text text-muted"]),
    ("hide", &["hide", "d-none"]),
    ("img-circle", &["img-circle", "rounded-circle"]),
    ("img-rounded", &["img-rounded", "rounded"]),
    ("input-group-addon", &["input-group-addon", "input-group-prepend"]),
    ("panel", &["panel", "card"]),
    ("panel-body", &["panel-body", "card-body"]),
    ("panel-default", &["panel-default", ""]),
    ("panel-footer", &["panel-footer", "card-footer"]),
    ("panel-heading", &["panel-heading", "card-header"]),
    ("panel-title", &["panel-title", "card-title"]),
    ("radio", &["radio", "form-check"]),
    ("show", &["show", "d-block"]),
    ("sr-only", &["sr-only", "sr-only", "visually-hidden"]),
    ("text-left", &["text-left", "text-left", "text-start"]),
    ("text-right", &["text-right", "text-right", "text-end"]),
    ("well", &["well", "card card-body"]),
];

static BS_CSS_MAP: LazyLock<BTreeMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| BS_CSS_ENTRIES.iter().copied().collect());

/// Class string for a style concept at a major version
///
/// Unknown concepts yield the empty string. The variant string may hold
/// several whitespace-separated tokens that apply together.
pub fn css_class_for(concept: &str, version: u32) -> &'static str {
    let Some(entry) = BS_CSS_MAP.get(concept) else {
        return "";
    };
    let index = version.saturating_sub(DEFAULT_BS_VERSION) as usize;
    entry[index.min(entry.len() - 1)]
}

/// Class tokens for a style concept at a major version
pub fn css_tokens_for(concept: &str, version: u32) -> Vec<&'static str> {
    css_class_for(concept, version).split_whitespace().collect()
}

/// The style concepts the mapping table knows about
pub fn style_concepts() -> impl Iterator<Item = &'static str> {
    BS_CSS_MAP.keys().copied()
}

impl VersionResolver<'_> {
    /// Class string for a style concept at the effective version
    pub fn css_class(&self, concept: &str) -> Result<String> {
        Ok(css_class_for(concept, self.resolve()?).to_string())
    }

    /// Class tokens for a style concept at the effective version
    pub fn css_class_tokens(&self, concept: &str) -> Result<Vec<&'static str>> {
        Ok(css_tokens_for(concept, self.resolve()?))
    }

    /// Add a concept's class tokens to an attribute map in place
    ///
    /// Idempotent; a concept resolving to nothing is a no-op.
    pub fn add_css_class(&self, attrs: &mut Attributes, concept: &str) -> Result<()> {
        for token in self.css_class_tokens(concept)? {
            attrs.add_class(token);
        }
        Ok(())
    }

    /// Remove a concept's class tokens from an attribute map in place
    ///
    /// Removing tokens that are not present is a no-op.
    pub fn remove_css_class(&self, attrs: &mut Attributes, concept: &str) -> Result<()> {
        for token in self.css_class_tokens(concept)? {
            attrs.remove_class(token);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_across_versions() {
        assert_eq!(css_class_for("panel", 3), "panel");
        assert_eq!(css_class_for("panel", 4), "card");
        // No version-5 override; falls back to the version-4 slot
        assert_eq!(css_class_for("panel", 5), "card");
    }

    #[test]
    fn test_version_5_override_honored() {
        assert_eq!(css_class_for("sr-only", 5), "visually-hidden");
        assert_eq!(css_class_for("sr-only", 4), "sr-only");
    }

    #[test]
    fn test_unknown_concept_degrades_silently() {
        assert_eq!(css_class_for("unknown-concept", 3), "");
        assert_eq!(css_class_for("unknown-concept", 5), "");
    }

    #[test]
    fn test_version_past_table_uses_last_variant() {
        assert_eq!(css_class_for("sr-only", 6), "visually-hidden");
        assert_eq!(css_class_for("panel", 9), "card");
    }

    #[test]
    fn test_multi_token_variants_split() {
        assert_eq!(
            css_tokens_for("badge-default", 4),
            ["badge", "badge-secondary"]
        );
        assert_eq!(css_tokens_for("panel-default", 4), Vec::<&str>::new());
    }

    #[test]
    fn test_index_zero_is_always_the_legacy_variant() {
        // Later slots may be empty (a concept can vanish in v4), but the
        // version-3 rendering exists for every known concept.
        for concept in style_concepts() {
            assert!(
                !css_class_for(concept, 3).is_empty(),
                "concept {concept} has no legacy variant"
            );
        }
    }
}
