//! Debounced image-source input handling.
//!
//! [`FileUpload`] coordinates the text input and file chooser of an image
//! property editor: keystrokes are debounced, blur flushes immediately, file
//! selection bypasses the debounce, and a monotonic request token guarantees
//! that a stale async probe result can never overwrite newer state.
//!
//! ## Modules
//!
//! - `debounce` - trailing-edge debounce scheduler (call/cancel/flush)
//! - `coordinator` - the `FileUpload` coordinator and its validation state

mod coordinator;
mod debounce;

pub use coordinator::*;
pub use debounce::*;
