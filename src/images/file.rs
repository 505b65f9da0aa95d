//! File capability interface and the local-filesystem implementation.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Coded failure from reading a file's content.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("file not found")]
    NotFound,
    #[error("file not readable")]
    NotReadable,
    #[error("read aborted")]
    Aborted,
    #[error("security error")]
    Security,
    #[error("encoding failure")]
    Encoding,
    #[error("unknown read failure")]
    Unknown,
}

/// A user-selected file, abstracted from the platform that produced it.
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// Original file name, e.g. `logo.png`
    fn name(&self) -> &str;

    /// Size in bytes as reported by the platform
    fn size_bytes(&self) -> u64;

    /// MIME type, e.g. `image/png`
    fn content_type(&self) -> &str;

    /// Read the whole content as a self-contained `data:` URI.
    async fn read_as_data_uri(&self) -> Result<String, ReadError>;
}

static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
        ("svg", "image/svg+xml"),
    ])
});

/// MIME type for a file path, from its extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .and_then(|ext| MIME_TYPES.get(ext.as_str()).copied())
        .unwrap_or("application/octet-stream")
}

/// A file on the local filesystem.
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
    mime: &'static str,
}

impl LocalFile {
    /// Stat the file and capture its name, size, and MIME type.
    pub async fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let meta = tokio::fs::metadata(&path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_for_path(&path);
        Ok(Self {
            path,
            name,
            size: meta.len(),
            mime,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.size
    }

    fn content_type(&self) -> &str {
        self.mime
    }

    async fn read_as_data_uri(&self) -> Result<String, ReadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(map_io_error)?;
        Ok(format!(
            "data:{};base64,{}",
            self.mime,
            BASE64.encode(&bytes)
        ))
    }
}

fn map_io_error(err: io::Error) -> ReadError {
    match err.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound,
        io::ErrorKind::PermissionDenied => ReadError::NotReadable,
        io::ErrorKind::Interrupted => ReadError::Aborted,
        io::ErrorKind::InvalidData => ReadError::Encoding,
        _ => ReadError::Unknown,
    }
}
