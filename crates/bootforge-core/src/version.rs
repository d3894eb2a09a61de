//! Bootstrap major-version resolution
//!
//! A widget or module instance carries an optional `bsVersion` override;
//! when unset the application-wide `params.bsVersion` fallback applies,
//! defaulting to version 3. Resolution is lazy and memoized per instance:
//! the first version-dependent access parses the configured value,
//! validates the matching companion package is installed, and checks the
//! owner exposes the widget contract. Every later access reuses the cached
//! major version.

use std::cell::OnceCell;

use tracing::debug;

use crate::config::HostEnv;
use crate::dependency;
use crate::error::{Error, Result};
use crate::grid::{self, ColCssPrefixes};
use crate::text;

/// Bootstrap **extra small** size modifier
pub const SIZE_X_SMALL: &str = "xs";

/// Bootstrap **small** size modifier
pub const SIZE_SMALL: &str = "sm";

/// Bootstrap **medium** size modifier (the default size)
pub const SIZE_MEDIUM: &str = "md";

/// Bootstrap **large** size modifier
pub const SIZE_LARGE: &str = "lg";

/// Bootstrap **extra large** size modifier
pub const SIZE_X_LARGE: &str = "xl";

/// Default Bootstrap major version when nothing is configured
pub const DEFAULT_BS_VERSION: u32 = 3;

/// Parse the major version out of a version-like string
///
/// Takes the leading character of the trimmed input; a digit becomes the
/// major version (clamped to the supported floor of 3), anything else
/// yields the default. This is the only tie-break rule for malformed
/// version strings: `"4.1.1"` parses to 4, `"x"` to 3.
pub fn parse_major_version(value: &str) -> u32 {
    let lead = text::substr(Some(text::trim(Some(value))), 0, Some(1));
    match lead.parse::<u32>() {
        Ok(ver) if ver >= DEFAULT_BS_VERSION => ver,
        _ => DEFAULT_BS_VERSION,
    }
}

/// Base name of the companion extension for a major version
///
/// Version 3 uses the bare `bootstrap` name; later versions append the
/// major version number.
pub fn ext_basename(version: u32) -> String {
    if version == DEFAULT_BS_VERSION {
        "bootstrap".to_string()
    } else {
        format!("bootstrap{version}")
    }
}

/// Contract every Bootstrap-aware widget type exposes
///
/// The associated constants are the size-modifier tokens version-dependent
/// rendering relies on. Implementors normally keep the defaults; the trait
/// bound itself is the compile-time form of the contract check.
pub trait BootstrapContract {
    /// Extra-small size token
    const SIZE_X_SMALL: &'static str = SIZE_X_SMALL;
    /// Small size token
    const SIZE_SMALL: &'static str = SIZE_SMALL;
    /// Medium size token
    const SIZE_MEDIUM: &'static str = SIZE_MEDIUM;
    /// Large size token
    const SIZE_LARGE: &'static str = SIZE_LARGE;
    /// Extra-large size token
    const SIZE_X_LARGE: &'static str = SIZE_X_LARGE;
}

/// Runtime capability-set form of [`BootstrapContract`]
///
/// Dynamically-configured consumers that cannot carry the trait bound hand
/// the resolver an explicit token set instead; resolution validates it and
/// reports the owning type on violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractTokens {
    type_name: String,
    sizes: [String; 5],
}

impl ContractTokens {
    /// Capture the contract of a trait implementor
    pub fn of<W: BootstrapContract>() -> Self {
        Self {
            type_name: std::any::type_name::<W>().to_string(),
            sizes: [
                W::SIZE_X_SMALL.to_string(),
                W::SIZE_SMALL.to_string(),
                W::SIZE_MEDIUM.to_string(),
                W::SIZE_LARGE.to_string(),
                W::SIZE_X_LARGE.to_string(),
            ],
        }
    }

    /// Build an explicit token set for a dynamically-configured type
    pub fn new(type_name: impl Into<String>, sizes: [&str; 5]) -> Self {
        Self {
            type_name: type_name.into(),
            sizes: sizes.map(str::to_string),
        }
    }

    /// The owning type name reported on violation
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The size tokens, smallest first
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    fn validate(&self) -> Result<()> {
        if self.sizes.iter().any(String::is_empty) {
            return Err(Error::contract_violation(
                &self.type_name,
                "every size modifier token must be non-empty",
            ));
        }
        Ok(())
    }
}

/// Per-instance Bootstrap version resolver
///
/// Owned by exactly one widget or module instance; never shared across
/// requests. Holds the instance-level version override, borrows the host
/// environment for the global fallback and capability checks, and caches
/// the resolved major version after the first access.
#[derive(Debug)]
pub struct VersionResolver<'e> {
    bs_version: Option<String>,
    env: &'e HostEnv,
    contract: ContractTokens,
    col_css_prefixes: Option<ColCssPrefixes>,
    resolved: OnceCell<u32>,
}

impl<'e> VersionResolver<'e> {
    /// Create a resolver with an explicit contract token set
    pub fn new(env: &'e HostEnv, contract: ContractTokens) -> Self {
        Self {
            bs_version: None,
            env,
            contract,
            col_css_prefixes: None,
            resolved: OnceCell::new(),
        }
    }

    /// Create a resolver for a [`BootstrapContract`] implementor
    pub fn for_widget<W: BootstrapContract>(env: &'e HostEnv) -> Self {
        Self::new(env, ContractTokens::of::<W>())
    }

    /// Set the instance-level version override (`"4"`, `"5.1"`, `"5.x"`, ...)
    pub fn with_bs_version(mut self, version: impl Into<String>) -> Self {
        self.bs_version = Some(version.into());
        self
    }

    /// Replace the built-in column prefix table
    pub fn with_col_css_prefixes(mut self, table: ColCssPrefixes) -> Self {
        self.col_css_prefixes = Some(table);
        self
    }

    /// The host environment this resolver reads from
    pub fn env(&self) -> &'e HostEnv {
        self.env
    }

    /// Resolve the effective major version, memoizing the result
    ///
    /// Validates the matching companion package is installed and the
    /// contract token set is complete. Errors are fatal configuration
    /// errors; a successful resolution never re-runs.
    pub fn resolve(&self) -> Result<u32> {
        if let Some(&ver) = self.resolved.get() {
            return Ok(ver);
        }
        let configured = self
            .bs_version
            .as_deref()
            .filter(|value| !value.trim().is_empty());
        let raw = configured
            .or_else(|| self.env.params.bs_version())
            .unwrap_or("3");
        let ver = parse_major_version(raw);
        self.check_companion(ver)?;
        self.contract.validate()?;
        debug!(version = ver, configured = raw, "resolved Bootstrap major version");
        let _ = self.resolved.set(ver);
        Ok(ver)
    }

    /// The effective major version (resolving on first access)
    pub fn version(&self) -> Result<u32> {
        self.resolve()
    }

    /// Whether the effective major version equals `ver`
    pub fn is_bs(&self, ver: u32) -> Result<bool> {
        Ok(self.resolve()? == ver)
    }

    /// Base name of the companion extension for the effective version
    pub fn ext_basename(&self) -> Result<String> {
        Ok(ext_basename(self.resolve()?))
    }

    /// Column class prefix for a size modifier at the effective version
    ///
    /// Unknown sizes degrade to the empty string.
    pub fn col_css_prefix(&self, size: &str) -> Result<String> {
        let ver = self.resolve()?;
        Ok(grid::col_css_prefix(self.col_css_prefixes.as_ref(), ver, size).to_string())
    }

    fn check_companion(&self, ver: u32) -> Result<()> {
        let basename = ext_basename(ver);
        let reason = format!(
            "to render Bootstrap {ver}.x styled output. Companion Bootstrap packages are \
             mutually exclusive; install exactly the one matching your configured major version"
        );
        dependency::check_dependency(&self.env.capabilities, &basename, &basename, &reason)
    }
}
