//! SLS client errors

use thiserror::Error;

/// Errors that can occur when interacting with the SLS API
#[derive(Debug, Error)]
pub enum SlsError {
    /// The request could not be assembled (bad URL composition, un-encodable header)
    #[error("Failed to build request: {0}")]
    Construction(String),

    /// Input rejected locally before any request was sent
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Request payload could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Transport failure, passed through from the HTTP transport untouched
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The service answered with a status outside the accepted set
    #[error("unexpected status code {status} expected {expected}")]
    UnexpectedStatus {
        /// Status code the service returned
        status: u16,
        /// Accepted status codes, e.g. `200 or 201`
        expected: &'static str,
    },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SlsError {
    /// Status code of an [`SlsError::UnexpectedStatus`], if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
