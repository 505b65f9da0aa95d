//! Resolve a local image file from the command line and print its
//! descriptor, exercising the upload pipeline end to end.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use slideboard::images::{DecodeProbe, LocalFile};
use slideboard::notifications::LogSink;
use slideboard::upload::{FileUpload, UploadEvent, UploadOptions};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: slideboard <image-file>")?;

    let file = LocalFile::open(&path)
        .await
        .with_context(|| format!("cannot open {path}"))?;

    let (upload, mut events) = FileUpload::new(
        UploadOptions::default(),
        Arc::new(DecodeProbe),
        Arc::new(LogSink),
    );
    upload.on_file_selected(&file, ()).await;

    match events.try_recv() {
        Ok(UploadEvent::Resolved { descriptor, .. }) => {
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
            Ok(())
        }
        Err(_) => bail!("{path} did not resolve to an image"),
    }
}
