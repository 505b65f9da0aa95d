//! Error types for image resolution.

use thiserror::Error;

use crate::images::ReadError;

/// Errors that can occur while resolving an image source.
///
/// Display strings are the user-facing notification messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// File at or above the configured size limit; rejected before any read
    #[error("Image must be smaller than {}MB", .max / 1_000_000)]
    FileTooLarge { size: u64, max: u64 },

    /// The file disappeared between selection and read
    #[error("File not found")]
    FileNotFound,

    /// The file exists but could not be opened for reading
    #[error("File not readable")]
    FileNotReadable,

    /// The read was interrupted before completing
    #[error("Reading the file was aborted")]
    FileReadAborted,

    /// The platform refused the read for security reasons
    #[error("Security error while reading file")]
    FileSecurityError,

    /// The content could not be encoded (typically: too large to encode)
    #[error("File too large")]
    FileEncodingError,

    /// A read failure with no specific mapping
    #[error("Error reading file")]
    FileReadUnknown,

    /// The source did not decode as an image
    #[error("Unable to load image")]
    ImageLoadFailed,

    /// Normalized source too short to be a plausible address. Not a real
    /// error: ignored silently, never notified.
    #[error("image source too short")]
    InputTooShort,
}

impl From<ReadError> for ResolveError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::NotFound => ResolveError::FileNotFound,
            ReadError::NotReadable => ResolveError::FileNotReadable,
            ReadError::Aborted => ResolveError::FileReadAborted,
            ReadError::Security => ResolveError::FileSecurityError,
            ReadError::Encoding => ResolveError::FileEncodingError,
            ReadError::Unknown => ResolveError::FileReadUnknown,
        }
    }
}
