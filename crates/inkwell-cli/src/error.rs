//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// The document could not be decoded
    #[error("Extraction error: {0}")]
    Extraction(#[from] inkwell_extractor::ExtractionError),

    /// The policy file was unusable
    #[error("Policy error: {0}")]
    Policy(#[from] inkwell_policy::PolicyError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
