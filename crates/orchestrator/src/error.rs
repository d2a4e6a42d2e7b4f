//! Error types for orchestrator operations.

use post_core::ValidationError;
use provider_writers::ConfigError;
use thiserror::Error;

/// Errors that block a whole generation run.
///
/// Per-platform provider failures are not errors at this level; they are
/// recorded in the run's result.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Required event fields were missing.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Provider configuration or HTTP client setup failed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The session was asked to do something its current state does not allow.
    #[error("invalid session state: {0}")]
    InvalidState(String),
}
