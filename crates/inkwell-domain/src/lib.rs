//! Inkwell Domain Layer
//!
//! This crate holds the value types and trait seams shared by the rest of the
//! workspace. It performs no I/O and knows nothing about document formats,
//! HTTP, or configuration files.
//!
//! ## Key Concepts
//!
//! - **Document**: an uploaded file, held only for one extraction call
//! - **Baseline**: the linguistic fingerprint computed from extracted text
//! - **Policy**: a versioned compliance document consulted by integrity checks
//!
//! ## Architecture
//!
//! - Only `serde` (boundary serialization) and `chrono` (timestamps) as
//!   external dependencies
//! - Pure data and trait definitions
//! - Implementations live in `inkwell-extractor`, `inkwell-baseline` and
//!   `inkwell-policy`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod baseline;
pub mod document;
pub mod policy;
pub mod traits;

// Re-exports for convenience
pub use baseline::{Baseline, LinguisticProfile};
pub use document::Document;
pub use policy::Policy;
pub use traits::{Clock, LinguisticAnalyzer, TextExtractor};
