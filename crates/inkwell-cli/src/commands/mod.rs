//! Command implementations.
//!
//! Each command returns its rendered output; `main` does the printing.

pub mod baseline;
pub mod extract;
pub mod policy;

pub use self::baseline::execute_baseline;
pub use self::extract::execute_extract;
pub use self::policy::execute_policy;

use crate::error::Result;
use inkwell_domain::Document;
use std::path::Path;

/// Read a document from disk, keeping its path as the filename
pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    Ok(Document::new(path.to_string_lossy(), bytes))
}
