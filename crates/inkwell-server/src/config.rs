//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, upload limit, an optional
//! policy file, and extractor settings.

use inkwell_extractor::ExtractorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Largest accepted upload in bytes (default: 10 MiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// TOML policy file replacing the builtin policies
    #[serde(default)]
    pub policy_file: Option<PathBuf>,

    /// Text extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Default upload limit: 10 MiB
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }
        self.extractor.validate().map_err(ConfigError::Invalid)
    }

    /// Local development defaults: loopback, port 8080, builtin policies
    pub fn local() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            max_upload_bytes: default_max_upload_bytes(),
            policy_file: None,
            extractor: ExtractorConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config() {
        let config = ServerConfig::local();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.policy_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::local();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            max_upload_bytes = 2048
            policy_file = "config/policies.toml"

            [extractor]
            paragraph_separator = "\n"
        "#;

        let config = ServerConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.policy_file, Some(PathBuf::from("config/policies.toml")));
        assert_eq!(config.extractor.paragraph_separator, "\n");
        assert!(!config.extractor.keep_empty_paragraphs);
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config = ServerConfig::from_toml("bind_address = \"::1\"\nbind_port = 80").unwrap();
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let result = ServerConfig::from_toml(
            "bind_address = \"127.0.0.1\"\nbind_port = 80\nmax_upload_bytes = 0",
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_extractor_section_rejected() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 80

            [extractor]
            paragraph_separator = ""
        "#;
        assert!(matches!(ServerConfig::from_toml(toml), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_port_rejected() {
        assert!(matches!(
            ServerConfig::from_toml("bind_address = \"127.0.0.1\""),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
