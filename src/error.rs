//! Error types for the insight orchestration layer
//!
//! None of these ever reach the orchestrator's caller: every failure is
//! caught at the invoker boundary and degraded to a synthetic response.
//! The taxonomy exists so the degrade log can say what actually went wrong.

use crate::models::BackendKind;
use thiserror::Error;

/// Result type alias for internal backend operations
pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Credentials missing for a backend. A routing signal, not a failure:
    /// the product intentionally runs fully offline/demo-capable.
    #[error("Backend not configured: {0}")]
    ConfigurationAbsent(BackendKind),

    /// Network error, timeout, or non-2xx status from a backend.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Response arrived but did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The local offline analyzer could not be loaded.
    #[error("Local model unavailable: {0}")]
    LocalModelUnavailable(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ServiceError::MalformedResponse(e.to_string())
        } else {
            ServiceError::TransportFailure(e.to_string())
        }
    }
}
