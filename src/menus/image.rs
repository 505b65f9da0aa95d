//! Image element menu.

use crate::types::{ElementPatch, ImageDescriptor};

/// The patch an image element receives when its source resolves: the new
/// source, the upload name (cleared for URL sources), and the natural
/// dimensions applied to the element's box.
pub fn element_patch(descriptor: &ImageDescriptor) -> ElementPatch {
    ElementPatch {
        src: Some(descriptor.src.clone()),
        image_name: Some(descriptor.image_name.clone()),
        width: Some(descriptor.width as f32),
        height: Some(descriptor.height as f32),
        ..ElementPatch::default()
    }
}

/// Remove the element's image, restoring the placeholder.
pub fn clear_patch() -> ElementPatch {
    ElementPatch {
        src: Some(crate::constants::DEFAULT_IMAGE_SRC.to_string()),
        image_name: Some(None),
        ..ElementPatch::default()
    }
}
