//! Unit tests for property-menu patch builders.

use slideboard::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use slideboard::menus::{code, image, slide};
use slideboard::types::{
    BackgroundSize, CodeLanguage, CodeTheme, ImageDescriptor, SlideStyle, Transition,
};

fn descriptor(name: Option<&str>) -> ImageDescriptor {
    ImageDescriptor {
        src: "http://example.com/bg.png".to_string(),
        width: 1280,
        height: 720,
        image_name: name.map(str::to_string),
    }
}

#[test]
fn image_patch_carries_source_name_and_dimensions() {
    let patch = image::element_patch(&descriptor(Some("bg.png")));
    assert_eq!(patch.src.as_deref(), Some("http://example.com/bg.png"));
    assert_eq!(patch.image_name, Some(Some("bg.png".to_string())));
    assert_eq!(patch.width, Some(1280.0));
    assert_eq!(patch.height, Some(720.0));
}

#[test]
fn image_clear_restores_placeholder_and_drops_name() {
    let patch = image::clear_patch();
    assert_eq!(
        patch.src.as_deref(),
        Some(slideboard::constants::DEFAULT_IMAGE_SRC)
    );
    assert_eq!(patch.image_name, Some(None));
}

#[test]
fn background_patch_defaults_to_cover() {
    let patch = slide::background_patch(&descriptor(None), None);
    assert_eq!(
        patch.background_image_src,
        Some(Some("http://example.com/bg.png".to_string()))
    );
    assert_eq!(patch.background_image_name, Some(None));
    assert_eq!(
        patch.style.unwrap().background_size,
        Some(BackgroundSize::Cover)
    );
}

#[test]
fn background_patch_preserves_an_explicit_size() {
    let patch = slide::background_patch(&descriptor(None), Some(BackgroundSize::Contain));
    assert_eq!(
        patch.style.unwrap().background_size,
        Some(BackgroundSize::Contain)
    );
}

#[test]
fn clear_background_nulls_both_fields() {
    let patch = slide::clear_background_patch();
    assert_eq!(patch.background_image_src, Some(None));
    assert_eq!(patch.background_image_name, Some(None));
}

#[test]
fn toggle_transition_adds_and_removes() {
    let current = vec![Transition::Slide];
    let with_fade = slide::toggle_transition(&current, Transition::Fade, true);
    assert_eq!(with_fade, vec![Transition::Slide, Transition::Fade]);

    let without_slide = slide::toggle_transition(&with_fade, Transition::Slide, false);
    assert_eq!(without_slide, vec![Transition::Fade]);
}

#[test]
fn toggle_transition_does_not_duplicate() {
    let current = vec![Transition::Zoom];
    let toggled = slide::toggle_transition(&current, Transition::Zoom, true);
    assert_eq!(toggled, vec![Transition::Zoom]);
}

#[test]
fn color_patch_is_none_when_nothing_changed() {
    let style = SlideStyle {
        background_color: Some("#ffffff".to_string()),
        opacity: Some(1.0),
        background_size: None,
    };
    assert_eq!(slide::color_patch(&style, "#ffffff", 1.0), None);
}

#[test]
fn color_patch_carries_only_the_changed_fields() {
    let style = SlideStyle {
        background_color: Some("#ffffff".to_string()),
        opacity: Some(1.0),
        background_size: None,
    };
    let patch = slide::color_patch(&style, "#000000", 1.0).unwrap();
    let style_patch = patch.style.unwrap();
    assert_eq!(style_patch.background_color.as_deref(), Some("#000000"));
    assert_eq!(style_patch.opacity, None);

    let patch = slide::color_patch(&style, "#ffffff", 0.5).unwrap();
    let style_patch = patch.style.unwrap();
    assert_eq!(style_patch.background_color, None);
    assert_eq!(style_patch.opacity, Some(0.5));
}

#[test]
fn language_and_theme_patches() {
    assert_eq!(
        code::language_patch(CodeLanguage::Rust).language,
        Some(CodeLanguage::Rust)
    );
    assert_eq!(
        code::theme_patch(CodeTheme::Okaidia).theme,
        Some(CodeTheme::Okaidia)
    );
}

#[test]
fn option_lists_include_the_defaults() {
    assert!(CodeLanguage::all().contains(&CodeLanguage::default()));
    assert!(CodeTheme::all().contains(&CodeTheme::default()));
    assert!(BackgroundSize::all().contains(&BackgroundSize::default()));
    assert_eq!(CodeLanguage::Cpp.label(), "C++");
    assert_eq!(BackgroundSize::Stretch.label(), "Stretch");
}

#[test]
fn font_size_steps_and_clamps() {
    assert_eq!(code::adjust_font_size(16.0, true).font_size, Some(17.0));
    assert_eq!(code::adjust_font_size(16.0, false).font_size, Some(15.0));
    assert_eq!(
        code::adjust_font_size(MIN_FONT_SIZE, false).font_size,
        Some(MIN_FONT_SIZE)
    );
    assert_eq!(
        code::adjust_font_size(MAX_FONT_SIZE, true).font_size,
        Some(MAX_FONT_SIZE)
    );
}
