//! Error types for the Extractor

use thiserror::Error;

/// Message shown to callers outside the process when extraction fails.
///
/// Detailed errors are logged server-side; boundaries surface only this.
pub const PUBLIC_FAILURE_MESSAGE: &str = "document processing failed";

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The word-processing container or its XML could not be read
    #[error("Failed to decode DOCX '{filename}': {reason}")]
    Docx {
        /// Name of the offending upload
        filename: String,
        /// Decoder diagnostic
        reason: String,
    },

    /// Plain-text content is not valid UTF-8
    #[error("'{filename}' is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Name of the offending upload
        filename: String,
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
