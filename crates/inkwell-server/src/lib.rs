//! Inkwell Server
//!
//! HTTP boundary for baseline ingestion and policy lookups.
//!
//! | Route                     | Purpose                              |
//! |---------------------------|--------------------------------------|
//! | `POST /baselines`         | Upload a document, receive a baseline |
//! | `GET /policies`           | Full policy history                  |
//! | `GET /policies/current`   | Policy in effect                     |
//! | `GET /policies/:version`  | Exact-match policy lookup            |
//! | `GET /health`             | Liveness                             |

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use inkwell_baseline::BaselinePipeline;
use inkwell_extractor::{DocumentExtractor, ExtractionError};
use inkwell_policy::{PolicyError, PolicyStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Extractor settings were rejected
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractionError),

    /// Policy file could not be loaded
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Load the configured policy file, or the builtin policies if none is set
pub fn load_policies(config: &ServerConfig) -> Result<PolicyStore, ServerError> {
    match &config.policy_file {
        Some(path) => Ok(PolicyStore::from_file(path)?),
        None => Ok(PolicyStore::builtin()),
    }
}

/// Build the shared handler state around an installed policy store
pub fn build_state(
    config: &ServerConfig,
    policies: &'static PolicyStore,
) -> Result<AppState, ServerError> {
    let extractor = DocumentExtractor::new(config.extractor.clone())?;

    Ok(AppState {
        pipeline: Arc::new(BaselinePipeline::with_extractor(extractor)),
        policies,
        max_upload_bytes: config.max_upload_bytes,
    })
}

/// Start the HTTP server
///
/// Installs the policy store process-wide, builds the pipeline, and serves
/// until the listener fails.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting Inkwell server");
    info!("Bind address: {}", config.bind_addr());
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let policies = inkwell_policy::install(load_policies(&config)?)?;
    info!(
        "Policies loaded: {} (current {})",
        policies.len(),
        policies.current_policy().version
    );

    let state = build_state(&config, policies)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
