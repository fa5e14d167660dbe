//! Upload types and data structures.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A user-supplied file awaiting submission.
///
/// The blob is opaque: any file, including an empty or non-image one, is
/// accepted and forwarded as-is. The widget does not retain it beyond the
/// one submission that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content: Bytes,
    media_type: Option<String>,
}

impl SelectedFile {
    /// Creates a file from a name and its raw content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            media_type: None,
        }
    }

    /// Attaches the declared media type (e.g. `image/png`).
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// File name as supplied by the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file content.
    #[must_use]
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Declared media type, when one is known.
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true for a zero-length blob.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Decoded server reply to a submission.
///
/// Unknown extra fields are tolerated; a reply without a `success` field
/// does not decode and surfaces as [`UploadError::Decode`].
///
/// [`UploadError::Decode`]: super::UploadError::Decode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether the server accepted the upload.
    pub success: bool,
    /// Server-provided message when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    /// An accepting reply.
    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A rejecting reply carrying the server's message.
    #[must_use]
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// What a completed submission did to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Upload accepted; the image view now points at the refreshed source.
    Applied {
        /// The cache-busted source the image view was set to.
        src: String,
    },
    /// Upload rejected by the server; the alert surface carried the message
    /// and the image view was left untouched.
    Rejected {
        /// Server-provided rejection message.
        error: String,
    },
}
