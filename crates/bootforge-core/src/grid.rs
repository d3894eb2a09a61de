//! Column-grid CSS prefixes
//!
//! Each Bootstrap major version names its grid column classes differently.
//! The default table below maps a major version and a size modifier to the
//! class prefix callers append a span count to (`col-sm-` + `6`). Instances
//! may override the whole table; lookup falls back to the built-in default.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::version::{SIZE_LARGE, SIZE_MEDIUM, SIZE_SMALL, SIZE_X_LARGE, SIZE_X_SMALL};

/// Size modifier for the extra-extra-large breakpoint introduced in v5
pub const SIZE_XX_LARGE: &str = "xxl";

/// Column class prefixes keyed by major version, then size modifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColCssPrefixes {
    by_version: BTreeMap<u32, BTreeMap<String, String>>,
}

impl ColCssPrefixes {
    /// Create an empty prefix table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix for a version/size pair
    pub fn set(
        &mut self,
        version: u32,
        size: impl Into<String>,
        prefix: impl Into<String>,
    ) -> &mut Self {
        self.by_version
            .entry(version)
            .or_default()
            .insert(size.into(), prefix.into());
        self
    }

    /// Look up the prefix for a version/size pair
    pub fn get(&self, version: u32, size: &str) -> Option<&str> {
        self.by_version
            .get(&version)
            .and_then(|sizes| sizes.get(size))
            .map(String::as_str)
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.by_version.is_empty()
    }
}

static DEFAULT_COL_CSS_PREFIXES: LazyLock<ColCssPrefixes> = LazyLock::new(|| {
    let mut table = ColCssPrefixes::new();
    for (size, prefix) in [
        (SIZE_X_SMALL, "col-xs-"),
        (SIZE_SMALL, "col-sm-"),
        (SIZE_MEDIUM, "col-md-"),
        (SIZE_LARGE, "col-lg-"),
        // v3 has no xl tier; the lg prefix is the closest rendering
        (SIZE_X_LARGE, "col-lg-"),
    ] {
        table.set(3, size, prefix);
    }
    for version in [4, 5] {
        for (size, prefix) in [
            (SIZE_X_SMALL, "col-"),
            (SIZE_SMALL, "col-sm-"),
            (SIZE_MEDIUM, "col-md-"),
            (SIZE_LARGE, "col-lg-"),
            (SIZE_X_LARGE, "col-xl-"),
        ] {
            table.set(version, size, prefix);
        }
    }
    table.set(5, SIZE_XX_LARGE, "col-xxl-");
    table
});

/// The built-in default column prefix table
pub fn default_col_css_prefixes() -> &'static ColCssPrefixes {
    &DEFAULT_COL_CSS_PREFIXES
}

/// Resolve a column prefix, preferring a non-empty override table
///
/// Unknown version/size pairs degrade to the empty string.
pub fn col_css_prefix<'a>(overrides: Option<&'a ColCssPrefixes>, version: u32, size: &str) -> &'a str {
    let table = match overrides {
        Some(table) if !table.is_empty() => table,
        _ => default_col_css_prefixes(),
    };
    table.get(version, size).unwrap_or("")
}
