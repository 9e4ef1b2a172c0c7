//! Format detection
//!
//! Formats are chosen from the file name alone. Content is never sniffed, so
//! a `.txt` upload holding a zip archive is decoded (and rejected) as text.

use inkwell_domain::Document;
use std::fmt;

/// Document formats the extractor can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Office Open XML word-processing document (`.docx`)
    Docx,

    /// Anything else, decoded as UTF-8 text
    PlainText,
}

impl DocumentFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "plain-text",
        }
    }

    /// Map a lowercased file suffix to a format
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("docx") => DocumentFormat::Docx,
            _ => DocumentFormat::PlainText,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which decoder handles a document
pub trait FormatDetector {
    /// Pick the format for this document
    fn detect(&self, document: &Document) -> DocumentFormat;
}

/// Detects formats by case-insensitive file-name suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixDetector;

impl FormatDetector for SuffixDetector {
    fn detect(&self, document: &Document) -> DocumentFormat {
        DocumentFormat::from_extension(document.extension().as_deref())
    }
}
