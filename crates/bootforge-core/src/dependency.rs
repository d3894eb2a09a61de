//! Dependency-presence checking
//!
//! Widgets frequently delegate to companion packages that are installed
//! separately. The checkers here verify a capability identifier resolves in
//! the host's [`CapabilityRegistry`] and fail with an actionable message
//! naming the package to install when it does not. Nothing is installed or
//! loaded from here; the check is presence-only.

use tracing::debug;

use crate::config::CapabilityRegistry;
use crate::error::{Error, Result};

/// Namespace prefix for Bootforge capability identifiers
pub const NAMESPACE_PREFIX: &str = "bootforge::";

/// Package-name prefix for Bootforge companion packages
pub const VENDOR_PREFIX: &str = "bootforge-";

/// Reason text used when a dependency check does not supply its own
pub const DEFAULT_REASON: &str = "for your selected functionality";

/// Known companion input-widget capabilities and the packages providing them
static INPUT_WIDGETS: &[(&str, &str)] = &[
    ("bootforge::widgets::Select2", "bootforge-widget-pack"),
    ("bootforge::widgets::Typeahead", "bootforge-widget-pack"),
    ("bootforge::widgets::SwitchInput", "bootforge-widget-pack"),
    ("bootforge::widgets::StarRating", "bootforge-widget-pack"),
    ("bootforge::widgets::RangeInput", "bootforge-widget-pack"),
    ("bootforge::widgets::ColorInput", "bootforge-widget-pack"),
    ("bootforge::widgets::DatePicker", "bootforge-widget-pack"),
    ("bootforge::widgets::TimePicker", "bootforge-widget-pack"),
    ("bootforge::widgets::DateTimePicker", "bootforge-widget-pack"),
    ("bootforge::daterange::DateRangePicker", "bootforge-daterange"),
    ("bootforge::sortinput::SortableInput", "bootforge-sortinput"),
    ("bootforge::money::MaskMoney", "bootforge-money"),
    ("bootforge::checkbox::CheckboxX", "bootforge-checkbox"),
];

/// A single dependency to validate
///
/// Used only at validation time; not persisted. Entries with an empty name
/// are skipped silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DependencyDescriptor {
    /// Capability identifier, with or without the [`NAMESPACE_PREFIX`]
    pub name: String,
    /// Package providing the capability, with or without the [`VENDOR_PREFIX`]
    pub package: String,
    /// Human-readable reason shown on failure
    pub reason: Option<String>,
}

impl DependencyDescriptor {
    /// Create a descriptor for a named capability
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            reason: None,
        }
    }

    /// Attach a failure reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Fully qualify a capability identifier with the Bootforge namespace
pub fn qualify(name: &str) -> String {
    if name.starts_with(NAMESPACE_PREFIX) {
        name.to_string()
    } else {
        format!("{NAMESPACE_PREFIX}{name}")
    }
}

/// Fully qualify a package name with the Bootforge vendor prefix
pub fn package_name(package: &str) -> String {
    if package.starts_with(VENDOR_PREFIX) {
        package.to_string()
    } else {
        format!("{VENDOR_PREFIX}{package}")
    }
}

/// Validate a single capability dependency
///
/// An empty `name` is a no-op. Otherwise the identifier is qualified with
/// the Bootforge namespace when needed and checked against the registry;
/// absence fails with [`Error::MissingDependency`].
pub fn check_dependency(
    caps: &CapabilityRegistry,
    name: &str,
    package: &str,
    reason: &str,
) -> Result<()> {
    if name.is_empty() {
        return Ok(());
    }
    let capability = qualify(name);
    if caps.contains(&capability) {
        debug!(capability = %capability, "dependency present");
        return Ok(());
    }
    Err(Error::missing_dependency(
        capability,
        package_name(package),
        reason,
    ))
}

/// Validate multiple capability dependencies
///
/// Entries with an empty name are skipped; missing reasons default to
/// [`DEFAULT_REASON`].
pub fn check_dependencies(caps: &CapabilityRegistry, deps: &[DependencyDescriptor]) -> Result<()> {
    for dep in deps {
        let reason = dep.reason.as_deref().unwrap_or(DEFAULT_REASON);
        check_dependency(caps, &dep.name, &dep.package, reason)?;
    }
    Ok(())
}

/// Known companion input-widget capabilities and their packages
pub fn input_widgets() -> &'static [(&'static str, &'static str)] {
    INPUT_WIDGETS
}

/// Whether the identifier names a known companion input widget
pub fn is_input_widget(name: &str) -> bool {
    let capability = qualify(name);
    INPUT_WIDGETS.iter().any(|(cap, _)| *cap == capability)
}

/// Validate that a known input-widget capability is installed
///
/// Unknown identifiers are a no-op; the caller may be using a custom widget
/// the registry knows nothing about.
pub fn validate_input_widget(caps: &CapabilityRegistry, name: &str, reason: &str) -> Result<()> {
    let capability = qualify(name);
    match INPUT_WIDGETS.iter().find(|(cap, _)| *cap == capability) {
        Some(&(cap, package)) => check_dependency(caps, cap, package, reason),
        None => Ok(()),
    }
}
