//! Source-to-descriptor resolution.

use std::sync::Arc;

use crate::constants::MIN_SRC_LEN;
use crate::images::{FileHandle, ImageProbe, ResolveError};
use crate::types::ImageDescriptor;

/// Prefix `http://` unless the string already carries a scheme. Idempotent.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    format!("http://{url}")
}

/// Resolves raw sources into validated [`ImageDescriptor`]s.
///
/// The resolver itself is stateless; staleness guarding belongs to the
/// coordinator that issues requests.
pub struct Resolver {
    probe: Arc<dyn ImageProbe>,
    min_src_len: usize,
}

impl Resolver {
    pub fn new(probe: Arc<dyn ImageProbe>) -> Self {
        Self {
            probe,
            min_src_len: MIN_SRC_LEN,
        }
    }

    pub fn with_min_src_len(mut self, min_src_len: usize) -> Self {
        self.min_src_len = min_src_len;
        self
    }

    /// Normalized-source length below which input is ignored.
    pub fn min_src_len(&self) -> usize {
        self.min_src_len
    }

    /// Resolve a typed source string.
    ///
    /// Inputs whose normalized form is shorter than the minimum length yield
    /// `InputTooShort` without touching the probe.
    pub async fn resolve_url(&self, raw: &str) -> Result<ImageDescriptor, ResolveError> {
        let src = normalize_url(raw);
        if src.chars().count() < self.min_src_len {
            return Err(ResolveError::InputTooShort);
        }
        let (width, height) = self.probe.probe(&src).await.inspect_err(|err| {
            tracing::debug!(%src, %err, "source probe failed");
        })?;
        Ok(ImageDescriptor {
            src,
            width,
            height,
            image_name: None,
        })
    }

    /// Resolve a selected file: size gate, read to data URI, then probe the
    /// URI exactly like the URL path.
    pub async fn resolve_file(
        &self,
        file: &dyn FileHandle,
        max_bytes: u64,
    ) -> Result<ImageDescriptor, ResolveError> {
        let size = file.size_bytes();
        if size >= max_bytes {
            return Err(ResolveError::FileTooLarge {
                size,
                max: max_bytes,
            });
        }
        let src = file.read_as_data_uri().await?;
        let (width, height) = self.probe.probe(&src).await.inspect_err(|err| {
            tracing::debug!(name = file.name(), %err, "uploaded file probe failed");
        })?;
        Ok(ImageDescriptor {
            src,
            width,
            height,
            image_name: Some(file.name().to_string()),
        })
    }
}
