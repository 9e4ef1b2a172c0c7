//! Policy file parsing
//!
//! Deployments may replace the builtin table with a TOML file:
//!
//! ```toml
//! [[policies]]
//! version = "1.0"
//! last_updated = "2024-01-15T00:00:00Z"
//! content = "Writers must submit original work."
//! rules = ["All submitted content must be original"]
//! ```
//!
//! Entries are listed oldest first; the last entry is the current policy.

use chrono::{DateTime, Utc};
use inkwell_domain::Policy;
use serde::Deserialize;

/// Top-level layout of a policy file
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy history, oldest first
    #[serde(default)]
    pub policies: Vec<PolicyEntry>,
}

/// One `[[policies]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyEntry {
    /// Version label
    pub version: String,

    /// Publication time, as an RFC 3339 string
    pub last_updated: DateTime<Utc>,

    /// Policy text
    pub content: String,

    /// Ordered rules
    #[serde(default)]
    pub rules: Vec<String>,
}

impl From<PolicyEntry> for Policy {
    fn from(entry: PolicyEntry) -> Self {
        Policy::new(entry.version, entry.last_updated, entry.content, entry.rules)
    }
}

impl PolicyFile {
    /// Parse a policy file from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Convert into domain policies, preserving order
    pub fn into_policies(self) -> Vec<Policy> {
        self.policies.into_iter().map(Policy::from).collect()
    }
}
