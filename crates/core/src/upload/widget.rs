//! Upload widget implementation.

use std::sync::Arc;

use chrono::Utc;

use super::error::UploadError;
use super::types::{SelectedFile, SubmitOutcome, UploadResponse};
use crate::events::{DragOver, FileDrop, FileSelection};

/// Transport seam for the upload leg.
///
/// This trait is implemented by the client crate to perform the actual
/// multipart POST. One call corresponds to exactly one submission.
pub trait UploadTransport: Send + Sync {
    /// Submit the file and decode the server reply.
    fn upload(
        &self,
        file: &SelectedFile,
    ) -> impl std::future::Future<Output = Result<UploadResponse, UploadError>> + Send;
}

/// The displayed profile image.
///
/// Implementations use interior mutability: the widget reads and writes the
/// source through a shared reference so concurrent submissions can each
/// apply their refresh on arrival.
pub trait ImageView: Send + Sync {
    /// Current image source.
    fn src(&self) -> String;

    /// Point the image at a new source.
    fn set_src(&self, src: String);
}

/// Blocking-modal notification surface for server-side rejections.
pub trait AlertSink: Send + Sync {
    /// Show the message to the user.
    fn alert(&self, message: &str);
}

/// Appends the cache-busting query fragment to an image source.
///
/// The suffix defeats the browser image cache so the refreshed picture is
/// re-fetched instead of served stale.
// TODO: a src that already carries a query string gains a second '?'.
#[must_use]
pub fn cache_bust(src: &str, millis: i64) -> String {
    format!("{src}?{millis}")
}

/// Profile-picture upload widget.
///
/// Binds the two file-selection modalities to a single submission path and
/// applies the UI side effect the server reply calls for. Collaborators are
/// injected rather than looked up, so the widget is testable without any
/// real page.
///
/// Submissions may overlap: methods take `&self` and nothing serializes
/// in-flight requests. Completions are unordered with respect to submission
/// order, and each successful completion rewrites the image source, so the
/// last response to arrive determines the final value.
pub struct UploadWidget<T: UploadTransport, V: ImageView, A: AlertSink> {
    transport: Arc<T>,
    image: Arc<V>,
    alerts: Arc<A>,
}

impl<T: UploadTransport, V: ImageView, A: AlertSink> UploadWidget<T, V, A> {
    /// Create a widget over the given transport and UI surfaces.
    #[must_use]
    pub fn new(transport: Arc<T>, image: Arc<V>, alerts: Arc<A>) -> Self {
        Self {
            transport,
            image,
            alerts,
        }
    }

    /// Submit one file.
    ///
    /// On acceptance the image source gains a `?<epoch-millis>` suffix; on
    /// rejection the server's message goes to the alert surface and the
    /// image is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the reply could
    /// not be decoded. No alert is raised for these; the caller decides.
    pub async fn submit(&self, file: SelectedFile) -> Result<SubmitOutcome, UploadError> {
        let response = self.transport.upload(&file).await?;

        if response.success {
            let src = cache_bust(&self.image.src(), Utc::now().timestamp_millis());
            self.image.set_src(src.clone());
            Ok(SubmitOutcome::Applied { src })
        } else {
            let error = response.error.unwrap_or_default();
            self.alerts.alert(&error);
            Ok(SubmitOutcome::Rejected { error })
        }
    }

    /// Handle a picker selection: submit its first file.
    ///
    /// An empty selection is a no-op and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures from [`Self::submit`].
    pub async fn on_change(
        &self,
        selection: FileSelection,
    ) -> Result<Option<SubmitOutcome>, UploadError> {
        match selection.into_first() {
            Some(file) => self.submit(file).await.map(Some),
            None => Ok(None),
        }
    }

    /// Handle a drag passing over the control.
    ///
    /// Only suppresses the default action; suppressing it is what lets the
    /// control accept the upcoming drop.
    pub fn on_drag_over(&self, event: &mut DragOver) {
        event.prevent_default();
    }

    /// Handle a drop: suppress the default action, then submit the first
    /// transferred file.
    ///
    /// An empty drop still suppresses the default action and yields
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures from [`Self::submit`].
    pub async fn on_drop(
        &self,
        event: &mut FileDrop,
    ) -> Result<Option<SubmitOutcome>, UploadError> {
        event.prevent_default();
        match event.take_first() {
            Some(file) => self.submit(file).await.map(Some),
            None => Ok(None),
        }
    }
}
