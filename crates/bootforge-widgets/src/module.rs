//! Module scaffolding
//!
//! A module groups related widgets under one identifier and owns their
//! translation category. Initialization mirrors the widget lifecycle:
//! resolve the Bootstrap version first, then wire translations.

use bootforge_core::{BootstrapContract, HostEnv, Result, VersionResolver};

use crate::i18n::{I18n, MessageSource};

/// Shared module state and lifecycle
#[derive(Debug, Clone, Default)]
pub struct ModuleCore {
    /// Module identifier
    pub module_id: String,
    /// Translation message category for the module's widgets
    pub msg_category: String,
    /// Instance-level Bootstrap version override
    pub bs_version: Option<String>,
    bs_ver: Option<u32>,
}

impl BootstrapContract for ModuleCore {}

impl ModuleCore {
    /// Create module state for an identifier
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            ..Self::default()
        }
    }

    /// Set the translation message category
    pub fn with_msg_category(mut self, category: impl Into<String>) -> Self {
        self.msg_category = category.into();
        self
    }

    /// Set the instance-level Bootstrap version override
    pub fn with_bs_version(mut self, version: impl Into<String>) -> Self {
        self.bs_version = Some(version.into());
        self
    }

    /// Initialize the module
    ///
    /// Resolves the Bootstrap version, then registers the translation
    /// source when a message category is configured.
    pub fn init(
        &mut self,
        env: &HostEnv,
        i18n: &mut I18n,
        source: Option<MessageSource>,
    ) -> Result<()> {
        let mut resolver = VersionResolver::for_widget::<Self>(env);
        if let Some(version) = &self.bs_version {
            resolver = resolver.with_bs_version(version.clone());
        }
        self.bs_ver = Some(resolver.resolve()?);
        if let Some(source) = source {
            i18n.init_i18n(&self.msg_category, source);
        }
        Ok(())
    }

    /// The resolved Bootstrap major version, once [`Self::init`] has run
    pub fn bs_ver(&self) -> Option<u32> {
        self.bs_ver
    }
}
