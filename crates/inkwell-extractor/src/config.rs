//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Separator inserted between paragraphs of structured documents
    pub paragraph_separator: String,

    /// Keep blank paragraphs (section breaks, spacer lines) as empty entries
    pub keep_empty_paragraphs: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.paragraph_separator.is_empty() {
            return Err("paragraph_separator must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Blank-line separated paragraphs, blanks dropped
    fn default() -> Self {
        Self {
            paragraph_separator: "\n\n".to_string(),
            keep_empty_paragraphs: false,
        }
    }
}
