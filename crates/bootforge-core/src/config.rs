//! Host configuration boundaries
//!
//! The host application hands the library two values at startup: an
//! application-parameters store ([`AppParams`]) and a capability registry
//! ([`CapabilityRegistry`]). Both are constructed once per process or
//! request and passed by reference; the library never reaches into ambient
//! global state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Parameter key holding the application-wide Bootstrap version fallback
pub const BS_VERSION_PARAM: &str = "bsVersion";

/// Application-parameters store provided by the host
///
/// Values are loosely typed; version resolution only reads the
/// [`BS_VERSION_PARAM`] entry, other entries are passed through untouched
/// for host-specific use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppParams {
    values: BTreeMap<String, Value>,
}

impl AppParams {
    /// Create an empty parameter store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get a raw parameter value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a parameter as a string slice, if it is one
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// The application-wide `bsVersion` fallback, if configured
    pub fn bs_version(&self) -> Option<&str> {
        self.get_str(BS_VERSION_PARAM)
    }
}

/// Capability-presence boundary
///
/// Holds the set of capability identifiers the host has registered, plus an
/// optional injected probe consulted for identifiers outside the set. This
/// replaces runtime class-existence checks so resolution logic stays
/// testable without a real host framework present.
#[derive(Default)]
pub struct CapabilityRegistry {
    names: BTreeSet<String>,
    probe: Option<Box<dyn Fn(&str) -> bool + Send + Sync>>,
}

impl CapabilityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability identifier
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.insert(name.into());
        self
    }

    /// Register several capability identifiers at once
    pub fn register_all<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.names.insert(name.into());
        }
        self
    }

    /// Install an injected existence probe consulted after the registered set
    pub fn with_probe(mut self, probe: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Whether the identifier resolves to a registered or probeable capability
    pub fn contains(&self, name: &str) -> bool {
        if self.names.contains(name) {
            return true;
        }
        match &self.probe {
            Some(probe) => probe(name),
            None => false,
        }
    }

    /// Registered identifiers, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("names", &self.names)
            .field("probe", &self.probe.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The host environment handed to version resolvers
#[derive(Debug, Default)]
pub struct HostEnv {
    /// Application-parameters store
    pub params: AppParams,
    /// Capability-presence registry
    pub capabilities: CapabilityRegistry,
}

impl HostEnv {
    /// Bundle parameters and capabilities into one environment value
    pub fn new(params: AppParams, capabilities: CapabilityRegistry) -> Self {
        Self {
            params,
            capabilities,
        }
    }
}
