//! HTTP transport and configuration for Mugshot.
//!
//! Implements the core crate's transport seam over reqwest and provides the
//! layered configuration the binary loads at startup.

pub mod config;
pub mod transport;

pub use config::{EndpointConfig, ImageConfig, UploaderConfig};
pub use transport::{HttpUploadTransport, UPLOAD_ENDPOINT};
