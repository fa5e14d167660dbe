//! Mugshot uploader
//!
//! Command-line harness around the upload widget: reads the file named on
//! the command line, submits it as the new profile picture, and reports the
//! refreshed image URL.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mugshot_client::{HttpUploadTransport, UploaderConfig};
use mugshot_core::events::FileSelection;
use mugshot_core::upload::{AlertSink, ImageView, SelectedFile, SubmitOutcome, UploadWidget};

/// Upload a profile picture.
#[derive(Debug, Parser)]
#[command(name = "mugshot", version, about)]
struct Cli {
    /// Image file to upload.
    file: PathBuf,
}

/// Profile image as tracked by the terminal session.
struct DisplayedImage {
    src: Mutex<String>,
}

impl DisplayedImage {
    fn new(src: String) -> Arc<Self> {
        Arc::new(Self {
            src: Mutex::new(src),
        })
    }
}

impl ImageView for DisplayedImage {
    fn src(&self) -> String {
        self.src.lock().expect("image src lock poisoned").clone()
    }

    fn set_src(&self, src: String) {
        *self.src.lock().expect("image src lock poisoned") = src;
    }
}

/// Alert surface writing to stderr.
struct ConsoleAlerts;

impl AlertSink for ConsoleAlerts {
    fn alert(&self, message: &str) {
        eprintln!("upload rejected: {message}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mugshot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = UploaderConfig::load().expect("Failed to load configuration");

    // Read the selected file
    let content = tokio::fs::read(&cli.file).await?;
    let name = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mut file = SelectedFile::new(name, content);
    if let Some(media_type) = mime_guess::from_path(&cli.file).first_raw() {
        file = file.with_media_type(media_type);
    }

    // Wire the widget
    let transport = Arc::new(HttpUploadTransport::from_config(&config)?);
    let image = DisplayedImage::new(config.image.src.clone());
    let widget = UploadWidget::new(transport, Arc::clone(&image), Arc::new(ConsoleAlerts));

    info!(
        base_url = %config.endpoint.base_url,
        file = %cli.file.display(),
        "uploading profile picture"
    );

    let selection = FileSelection::new(vec![file]);
    match widget.on_change(selection).await? {
        Some(SubmitOutcome::Applied { src }) => {
            println!("profile picture updated: {src}");
        }
        Some(SubmitOutcome::Rejected { .. }) => {
            // Alert already shown on stderr.
        }
        None => {
            println!("no file selected");
        }
    }

    Ok(())
}
