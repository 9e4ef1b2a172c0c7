//! Immutable, ordered policy table

use crate::builtin::BUILTIN_POLICIES;
use crate::config::PolicyFile;
use crate::error::PolicyError;
use inkwell_domain::Policy;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Read-only history of compliance policies, oldest first.
///
/// A store is validated once at construction and offers no way to change
/// it afterwards, so any number of threads may read it without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyStore {
    // Non-empty, unique versions, ascending `last_updated`
    policies: Vec<Policy>,
}

impl PolicyStore {
    /// Build a store from a policy history, oldest first.
    ///
    /// Rejects an empty history, blank or duplicate versions, and policies
    /// published earlier than the one before them.
    pub fn new(policies: Vec<Policy>) -> Result<Self, PolicyError> {
        validate(&policies)?;
        debug!("Policy store built with {} policies", policies.len());
        Ok(Self { policies })
    }

    /// The policies compiled into the binary
    pub fn builtin() -> Self {
        Self {
            policies: BUILTIN_POLICIES.clone(),
        }
    }

    /// Build a store from a TOML policy file's contents
    pub fn from_toml(toml_str: &str) -> Result<Self, PolicyError> {
        let file = PolicyFile::from_toml(toml_str)?;
        Self::new(file.into_policies())
    }

    /// Load a store from a TOML policy file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_toml(&contents)?;
        info!(
            "Loaded {} policies from {} (current: {})",
            store.len(),
            path.display(),
            store.current_policy().version
        );
        Ok(store)
    }

    /// The policy in effect: the most recent entry
    pub fn current_policy(&self) -> &Policy {
        &self.policies[self.policies.len() - 1]
    }

    /// The policy whose version equals `version` exactly, if any
    pub fn get_policy_by_version(&self, version: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.has_version(version))
    }

    /// Full history, oldest first
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Number of policies in the history
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(policies: &[Policy]) -> Result<(), PolicyError> {
    if policies.is_empty() {
        return Err(PolicyError::Empty);
    }

    let mut seen = HashSet::new();
    for (idx, policy) in policies.iter().enumerate() {
        if policy.version.trim().is_empty() {
            return Err(PolicyError::EmptyVersion(idx));
        }
        if !seen.insert(policy.version.as_str()) {
            return Err(PolicyError::DuplicateVersion(policy.version.clone()));
        }
    }

    for pair in policies.windows(2) {
        if pair[1].last_updated < pair[0].last_updated {
            return Err(PolicyError::OutOfOrder {
                version: pair[1].version.clone(),
                updated: pair[1].last_updated,
                previous: pair[0].last_updated,
            });
        }
    }

    Ok(())
}
