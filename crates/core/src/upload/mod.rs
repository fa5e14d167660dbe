//! Profile-picture upload widget.
//!
//! This module provides the upload trigger handling:
//! - Packaging a selected file for a single multipart submission
//! - Applying the cache-busting refresh to the displayed image on success
//! - Surfacing server-side rejections through the alert surface
//! - Typed transport failures instead of silently dropped ones

pub mod error;
pub mod types;
pub mod widget;

#[cfg(test)]
mod props;

pub use error::UploadError;
pub use types::{SelectedFile, SubmitOutcome, UploadResponse};
pub use widget::{AlertSink, ImageView, UploadTransport, UploadWidget, cache_bust};
