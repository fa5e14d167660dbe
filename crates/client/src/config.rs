//! Uploader configuration management.

use serde::Deserialize;

/// Uploader configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploaderConfig {
    /// Endpoint configuration.
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Displayed image configuration.
    #[serde(default)]
    pub image: ImageConfig,
}

/// Endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the server hosting the upload endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

/// Displayed image configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// Source the profile image is served from before any refresh.
    #[serde(default = "default_image_src")]
    pub src: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            src: default_image_src(),
        }
    }
}

fn default_image_src() -> String {
    "/images/profile".to_string()
}

impl UploaderConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MUGSHOT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
