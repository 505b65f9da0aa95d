//! Application-wide constants.
//!
//! Centralizes magic numbers so the upload and editing subsystems stay
//! self-documenting.

// ============================================================================
// Image Upload
// ============================================================================

/// Maximum accepted upload size in bytes. Files at or above this size are
/// rejected before any read is attempted.
pub const MAX_UPLOAD_BYTES: u64 = 3_000_000;

/// Quiet period for the image-source text input, in milliseconds. A probe is
/// only issued once this long has passed without another keystroke.
pub const SOURCE_DEBOUNCE_MS: u64 = 500;

/// Normalized source strings shorter than this are ignored rather than
/// probed; the user is almost certainly still typing the address.
pub const MIN_SRC_LEN: usize = 10;

/// Placeholder source assigned to freshly created image elements.
pub const DEFAULT_IMAGE_SRC: &str = "assets/placeholder-image.svg";

// ============================================================================
// Element Defaults
// ============================================================================

/// Default font size for code elements
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Minimum font size for code elements
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum font size for code elements
pub const MAX_FONT_SIZE: f32 = 200.0;

/// Step used by the font-size incrementer
pub const FONT_SIZE_STEP: f32 = 1.0;

/// Text shown by a code element before the user edits it
pub const DEFAULT_CODE_TEXT: &str = "// your code here";

/// Text shown by a text element before the user edits it
pub const DEFAULT_TEXT: &str = "Double-click to edit";

/// Default text element size (width, height)
pub const DEFAULT_TEXT_SIZE: (f32, f32) = (300.0, 100.0);

/// Default code element size (width, height)
pub const DEFAULT_CODE_SIZE: (f32, f32) = (400.0, 200.0);

/// Default image element size (width, height)
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (400.0, 300.0);

/// Default chart element size (width, height)
pub const DEFAULT_CHART_SIZE: (f32, f32) = (500.0, 350.0);
