//! Inkwell Extractor
//!
//! Decodes uploaded documents into plain text.
//!
//! # Architecture
//!
//! ```text
//! Document → FormatDetector → FormatDecoder → String
//!              (suffix)        (docx | utf-8)
//! ```
//!
//! The format is chosen from the file-name suffix only. `.docx` uploads are
//! parsed with `docx-rs` and reduced to their paragraph text; every other
//! suffix is decoded as strict UTF-8. Extraction is a pure bytes → string
//! transformation: no network, no disk, and on failure no partial text.
//!
//! # Example Usage
//!
//! ```
//! use inkwell_domain::Document;
//! use inkwell_extractor::{DocumentExtractor, ExtractorConfig};
//!
//! let extractor = DocumentExtractor::new(ExtractorConfig::default()).unwrap();
//! let doc = Document::new("notes.txt", "Plain words.");
//! assert_eq!(extractor.extract(&doc).unwrap(), "Plain words.");
//! ```

#![warn(missing_docs)]

mod config;
mod decoder;
mod docx;
mod error;
mod extractor;
mod format;


pub use config::ExtractorConfig;
pub use decoder::{FormatDecoder, PlainTextDecoder};
pub use docx::DocxDecoder;
pub use error::{ExtractionError, PUBLIC_FAILURE_MESSAGE};
pub use extractor::DocumentExtractor;
pub use format::{DocumentFormat, FormatDetector, SuffixDetector};
