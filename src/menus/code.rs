//! Code element menu: language, theme, font size.

use crate::constants::{FONT_SIZE_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::types::{CodeLanguage, CodeTheme, ElementPatch};

pub fn language_patch(language: CodeLanguage) -> ElementPatch {
    ElementPatch {
        language: Some(language),
        ..ElementPatch::default()
    }
}

pub fn theme_patch(theme: CodeTheme) -> ElementPatch {
    ElementPatch {
        theme: Some(theme),
        ..ElementPatch::default()
    }
}

/// Step the font size up or down, clamped to the allowed range.
pub fn adjust_font_size(current: f32, increase: bool) -> ElementPatch {
    let delta = if increase {
        FONT_SIZE_STEP
    } else {
        -FONT_SIZE_STEP
    };
    ElementPatch {
        font_size: Some((current + delta).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)),
        ..ElementPatch::default()
    }
}
