//! Slide menu: background image, background size, transitions, color.

use crate::types::{
    BackgroundSize, ImageDescriptor, SlidePatch, SlideStyle, SlideStylePatch, Transition,
};

/// Patch applying a resolved image as the slide background. An explicit
/// background-size choice survives; otherwise the image covers the slide.
pub fn background_patch(
    descriptor: &ImageDescriptor,
    current_size: Option<BackgroundSize>,
) -> SlidePatch {
    SlidePatch {
        background_image_src: Some(Some(descriptor.src.clone())),
        background_image_name: Some(descriptor.image_name.clone()),
        style: Some(SlideStylePatch {
            background_size: Some(current_size.unwrap_or(BackgroundSize::Cover)),
            ..SlideStylePatch::default()
        }),
        ..SlidePatch::default()
    }
}

/// Patch removing the slide background image.
pub fn clear_background_patch() -> SlidePatch {
    SlidePatch {
        background_image_src: Some(None),
        background_image_name: Some(None),
        ..SlidePatch::default()
    }
}

pub fn background_size_patch(size: BackgroundSize) -> SlidePatch {
    SlidePatch {
        style: Some(SlideStylePatch {
            background_size: Some(size),
            ..SlideStylePatch::default()
        }),
        ..SlidePatch::default()
    }
}

/// Toggle one transition in the slide's transition list.
pub fn toggle_transition(
    current: &[Transition],
    transition: Transition,
    enabled: bool,
) -> Vec<Transition> {
    let mut next: Vec<Transition> = current
        .iter()
        .copied()
        .filter(|t| *t != transition)
        .collect();
    if enabled {
        next.push(transition);
    }
    next
}

/// Background color/opacity patch carrying only the fields that actually
/// changed. `None` when neither did, so no store write is issued.
pub fn color_patch(style: &SlideStyle, hex: &str, opacity: f32) -> Option<SlidePatch> {
    let color_changed = style.background_color.as_deref() != Some(hex);
    let opacity_changed = style.opacity != Some(opacity);
    if !color_changed && !opacity_changed {
        return None;
    }
    Some(SlidePatch {
        style: Some(SlideStylePatch {
            background_color: color_changed.then(|| hex.to_string()),
            opacity: opacity_changed.then_some(opacity),
            ..SlideStylePatch::default()
        }),
        ..SlidePatch::default()
    })
}
