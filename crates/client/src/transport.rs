//! HTTP implementation of the upload transport seam.

use std::time::Duration;

use reqwest::multipart;
use tracing::debug;

use mugshot_core::upload::{SelectedFile, UploadError, UploadResponse, UploadTransport};

use crate::config::UploaderConfig;

/// Path of the upload endpoint, relative to the configured base URL.
pub const UPLOAD_ENDPOINT: &str = "/images/profile/upload";

/// Upload transport over HTTP.
///
/// Sends one multipart POST per submission with a single part named
/// `image`. The HTTP status of the reply is not inspected; the decoded body
/// alone determines the outcome.
pub struct HttpUploadTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUploadTransport {
    /// Create a transport over an existing HTTP client.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a transport from configuration, with the configured request
    /// timeout applied to the underlying client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &UploaderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.endpoint.request_timeout_secs))
            .build()?;
        Ok(Self::new(client, config.endpoint.base_url.clone()))
    }

    /// Full URL the transport posts to.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("{}{UPLOAD_ENDPOINT}", self.base_url)
    }
}

impl UploadTransport for HttpUploadTransport {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, UploadError> {
        debug!(
            name = file.name(),
            size = file.len(),
            "submitting profile picture"
        );

        let mut part = multipart::Part::bytes(file.content().to_vec())
            .file_name(file.name().to_string());
        if let Some(media_type) = file.media_type() {
            part = part
                .mime_str(media_type)
                .map_err(|e| UploadError::network(e.to_string()))?;
        }
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.endpoint_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::network(e.to_string()))?;
        let reply: UploadResponse =
            serde_json::from_str(&body).map_err(|e| UploadError::decode(e.to_string()))?;

        debug!(success = reply.success, "upload reply decoded");
        Ok(reply)
    }
}
