//! Dimension probing for image sources.

use std::io::Cursor;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::images::ResolveError;

/// Looks up the natural pixel dimensions of an image source.
///
/// Probes cannot be aborted once issued; staleness is handled by the caller
/// comparing request tokens at completion time.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn probe(&self, src: &str) -> Result<(u32, u32), ResolveError>;
}

/// Built-in probe for self-contained sources: `data:` URIs and local paths.
///
/// Remote `http(s)` sources need network access and therefore a host-supplied
/// probe; this one answers `ImageLoadFailed` for them.
#[derive(Default)]
pub struct DecodeProbe;

#[async_trait]
impl ImageProbe for DecodeProbe {
    async fn probe(&self, src: &str) -> Result<(u32, u32), ResolveError> {
        if src.starts_with("data:") {
            let bytes = decode_data_uri(src).ok_or(ResolveError::ImageLoadFailed)?;
            return dimensions_from_bytes(&bytes);
        }
        if src.starts_with("http://") || src.starts_with("https://") {
            tracing::debug!(src, "remote probe requested from decode-only probe");
            return Err(ResolveError::ImageLoadFailed);
        }
        let bytes = tokio::fs::read(src)
            .await
            .map_err(|_| ResolveError::ImageLoadFailed)?;
        dimensions_from_bytes(&bytes)
    }
}

/// Extract the base64 payload of a `data:` URI.
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    BASE64.decode(payload.trim()).ok()
}

fn dimensions_from_bytes(bytes: &[u8]) -> Result<(u32, u32), ResolveError> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|_| ResolveError::ImageLoadFailed)?
        .into_dimensions()
        .map_err(|_| ResolveError::ImageLoadFailed)
}
