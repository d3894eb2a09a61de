//! Error types for bootforge-core

use thiserror::Error;

/// Result type alias using bootforge-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Bootforge
///
/// All variants are fatal configuration errors surfaced at resolution time.
/// Nothing here is retried or recovered at runtime.
#[derive(Error, Debug)]
pub enum Error {
    /// A required companion capability or extension is not installed
    #[error(
        "The capability '{capability}' was not found and is required {reason}.\n\n\
         Please ensure you have installed the '{package}' package. \
         To install, you can run this command from your application root:\n\n\
         \x20   cargo add {package}\n"
    )]
    MissingDependency {
        capability: String,
        package: String,
        reason: String,
    },

    /// The consuming type does not expose the Bootstrap widget contract
    #[error("'{type_name}' does not satisfy the Bootstrap widget contract: {message}")]
    ContractViolation { type_name: String, message: String },

    /// A required date/time format string could not be derived
    #[error("Error parsing '{kind}' format")]
    InvalidFormat { kind: String },
}

impl Error {
    /// Create a missing dependency error
    pub fn missing_dependency(
        capability: impl Into<String>,
        package: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MissingDependency {
            capability: capability.into(),
            package: package.into(),
            reason: reason.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract_violation(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContractViolation {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(kind: impl Into<String>) -> Self {
        Self::InvalidFormat { kind: kind.into() }
    }
}
