//! Image resource resolution.
//!
//! Turns a user-supplied source string or a local file into a validated
//! [`ImageDescriptor`](crate::types::ImageDescriptor), or one of a small set
//! of errors.
//!
//! ## Error Handling
//!
//! All operations return `Result<_, ResolveError>`. URL-origin failures are
//! benign (the user may still be typing); file-origin failures carry the
//! user-facing message for the notification sink. `InputTooShort` is not a
//! real error: callers ignore it silently.
//!
//! ## Capabilities
//!
//! Platform primitives live behind two traits so hosts can plug their own:
//! - [`FileHandle`] — a selected file (name, size, content read as data URI)
//! - [`ImageProbe`] — dimension lookup for a source string
//!
//! The built-in [`DecodeProbe`] covers data URIs and local paths; probing
//! remote `http(s)` sources is the embedding shell's concern.

mod error;
mod file;
mod probe;
mod resolver;

pub use error::*;
pub use file::*;
pub use probe::*;
pub use resolver::*;
