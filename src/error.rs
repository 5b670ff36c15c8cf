//! SDK error definitions.

use thiserror::Error;

/// Convenience alias for SDK results.
pub type Result<T> = std::result::Result<T, PlategaError>;

/// Error returned when the API answers with a non-success HTTP status.
///
/// Carries the numeric status code, a message derived from the response
/// body, and the raw body text when it could be read.
#[derive(Debug, Error)]
#[error("HTTP {status_code}: {message}")]
pub struct HttpError {
    /// Numeric HTTP status code.
    pub status_code: u16,
    /// Human-readable message derived from the response body.
    pub message: String,
    /// Raw response text, kept for diagnostics.
    pub response: Option<String>,
}

/// Errors surfaced by the SDK.
#[derive(Debug, Error)]
pub enum PlategaError {
    /// The API returned a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Strict model construction failed: a required field is missing or
    /// a declared field has the wrong type.
    #[error("{model} validation failed: {reason}")]
    Validation {
        /// Model that rejected the input.
        model: &'static str,
        /// What was missing or mismatched.
        reason: String,
    },

    /// Connection, DNS resolution, or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that is not valid JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client could not be constructed.
    #[error("client configuration error: {0}")]
    Config(String),
}

impl PlategaError {
    pub(crate) fn validation(model: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            model,
            reason: reason.into(),
        }
    }
}
