//! Upload error types.

use thiserror::Error;

/// Upload submission errors.
///
/// These cover the transport leg only. A server-side rejection
/// (`success: false`) is not an error here: it is the handled
/// [`SubmitOutcome::Rejected`] path.
///
/// [`SubmitOutcome::Rejected`]: super::SubmitOutcome::Rejected
#[derive(Debug, Error)]
pub enum UploadError {
    /// Request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl UploadError {
    /// Create a network error.
    #[must_use]
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a decode error.
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
