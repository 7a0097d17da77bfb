//! Error type for client operations.

use nowpayments_types::ValidationError;

/// Failures a client call can produce.
///
/// `Validation` is raised before any network IO; the remaining variants map
/// the three ways a remote exchange can go wrong. The client never retries: a
/// failed call is terminal and the caller decides what happens next (payment
/// creation is not idempotent, retrying it can create duplicate payments).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A precondition failed client-side; no request was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The transport layer failed (connect, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the HTTP status code for `Api` errors.
    ///
    /// A not-found payment surfaces as status 404 here rather than as a
    /// dedicated variant; callers inspect the code.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
