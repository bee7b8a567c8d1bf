use serde::Serialize;
use thiserror::Error;

/// Errors raised by a remote enrichment source.
///
/// These never reach callers of the analysis entry points. They are carried on
/// the detailed outcome as the reason a local fallback was used.
#[derive(Debug, Error, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum EnrichmentError {
    /// Enrichment is disabled or missing credentials.
    #[error("Enrichment source is not configured")]
    NotConfigured,
    /// Transport-level failure (connection refused, TLS, DNS, ...).
    #[error("Enrichment request failed: {0}")]
    Http(String),
    /// The remote answered with a non-2xx status.
    #[error("Enrichment request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The remote did not answer within the configured bound.
    #[error("Enrichment request timed out after {0} ms")]
    Timeout(u64),
    /// The payload could not be decoded or was empty.
    #[error("Malformed enrichment payload: {0}")]
    Malformed(String),
    /// The top label has no counterpart in the closed label set.
    #[error("Unknown enrichment label: {0}")]
    UnknownLabel(String),
}

impl From<reqwest::Error> for EnrichmentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EnrichmentError::Malformed(err.to_string())
        } else {
            EnrichmentError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EnrichmentError {
    fn from(err: serde_json::Error) -> Self {
        EnrichmentError::Malformed(err.to_string())
    }
}

/// Crate-wide error type for the fallible edges (configuration, telemetry,
/// client construction).
#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// Errors from the remote enrichment source.
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors (e.g., bad environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Enrichment(EnrichmentError::from(err))
    }
}
