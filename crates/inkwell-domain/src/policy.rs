//! Policy module - versioned compliance documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A versioned compliance policy.
///
/// Policies are immutable once published: a revision is a new `Policy` with
/// a new `version`, appended after the ones it supersedes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Version label, compared by exact string equality
    pub version: String,

    /// When this version was published
    pub last_updated: DateTime<Utc>,

    /// Human-readable policy text
    pub content: String,

    /// Individual rules, in the order they are presented to writers
    pub rules: Vec<String>,
}

impl Policy {
    /// Create a new policy
    pub fn new(
        version: impl Into<String>,
        last_updated: DateTime<Utc>,
        content: impl Into<String>,
        rules: Vec<String>,
    ) -> Self {
        Self {
            version: version.into(),
            last_updated,
            content: content.into(),
            rules,
        }
    }

    /// Whether this policy carries the given version label.
    ///
    /// No trimming, case folding, or semantic-version comparison: `"1.0"`
    /// does not match `"1"` or `" 1.0"`.
    pub fn has_version(&self, version: &str) -> bool {
        self.version == version
    }
}
