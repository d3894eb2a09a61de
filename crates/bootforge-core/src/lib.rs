//! # bootforge-core
//!
//! Core library for the Bootforge widget ecosystem providing:
//! - Bootstrap major-version resolution (3.x, 4.x, 5.x) with lazy caching
//! - The version-aware CSS class mapping table and column-grid prefixes
//! - HTML attribute maps with order-preserving class token handling
//! - Capability registry and dependency-presence checking
//! - Null-safe text helpers for optional string inputs

pub mod attrs;
pub mod config;
pub mod dependency;
pub mod error;
pub mod grid;
pub mod style;
pub mod text;
pub mod version;

pub use attrs::{AttrValue, Attributes};
pub use config::{AppParams, CapabilityRegistry, HostEnv};
pub use dependency::DependencyDescriptor;
pub use error::{Error, Result};
pub use grid::ColCssPrefixes;
pub use version::{parse_major_version, BootstrapContract, ContractTokens, VersionResolver};
