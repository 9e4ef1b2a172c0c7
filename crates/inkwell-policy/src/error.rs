//! Policy store error types

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised while building or installing a policy table.
///
/// Lookups never fail: a missing version is `None`, not an error.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// No policies configured
    #[error("Policy table is empty")]
    Empty,

    /// A policy has a blank version label
    #[error("Policy at position {0} has an empty version")]
    EmptyVersion(usize),

    /// Two policies share a version label
    #[error("Duplicate policy version: {0}")]
    DuplicateVersion(String),

    /// Policies are not in ascending recency order
    #[error("Policy {version} (updated {updated}) is older than the policy before it (updated {previous})")]
    OutOfOrder {
        /// Offending version
        version: String,
        /// Its publication time
        updated: DateTime<Utc>,
        /// Publication time of the preceding policy
        previous: DateTime<Utc>,
    },

    /// Failed to read policy file
    #[error("Failed to read policy file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse policy TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The process-wide store was already set
    #[error("Policy store already installed")]
    AlreadyInstalled,
}
