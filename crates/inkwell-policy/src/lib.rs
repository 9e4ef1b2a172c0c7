//! Inkwell Policy
//!
//! Versioned compliance policies consulted by integrity checks.
//!
//! The store is an ordered, immutable history: oldest policy first, current
//! policy last. It is built once (from the builtin table or a TOML file) and
//! never mutated, so concurrent readers need no locking.
//!
//! # Examples
//!
//! ```
//! use inkwell_policy::PolicyStore;
//!
//! let store = PolicyStore::builtin();
//! assert_eq!(store.current_policy().version, "2.0");
//! assert!(store.get_policy_by_version("1.0").is_some());
//! assert!(store.get_policy_by_version("9.9").is_none());
//! ```

#![warn(missing_docs)]

mod builtin;
mod config;
mod error;
mod global;
mod store;

pub use config::{PolicyEntry, PolicyFile};
pub use error::PolicyError;
pub use global::{global, install};
pub use store::PolicyStore;
