//! Core types for the slideboard document model.
//!
//! This module defines the slide/element tree the editor operates on, the
//! property-patch types carried by store mutations, and the image descriptor
//! produced by the resource resolver.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CHART_SIZE, DEFAULT_CODE_SIZE, DEFAULT_CODE_TEXT, DEFAULT_FONT_SIZE,
    DEFAULT_IMAGE_SIZE, DEFAULT_IMAGE_SRC, DEFAULT_TEXT, DEFAULT_TEXT_SIZE,
};

// ============================================================================
// Image Descriptor
// ============================================================================

/// A validated image resource, produced only by the resolver.
///
/// `image_name` is `None` for remote URLs and `Some` for uploaded files.
/// Width and height are the natural pixel dimensions reported by the decoder,
/// so they are positive whenever `src` denotes a raster that actually loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub image_name: Option<String>,
}

// ============================================================================
// Selection
// ============================================================================

/// The store's current selection, broadcast on a watch channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Index of the slide being shown
    pub slide_index: usize,
    /// Index of the selected element on that slide, if any
    pub element_index: Option<usize>,
}

impl Selection {
    pub fn none(slide_index: usize) -> Self {
        Self {
            slide_index,
            element_index: None,
        }
    }
}

/// A stable reference to one element, captured at edit-entry time so a commit
/// targets the element that was being edited even if the selection has since
/// moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementAddress {
    pub slide_index: usize,
    pub element_index: usize,
}

// ============================================================================
// Elements
// ============================================================================

/// The kind of a canvas element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Text,
    Image,
    Code,
    Chart,
}

impl ElementKind {
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Code => "Code",
            ElementKind::Chart => "Chart",
        }
    }
}

/// Languages offered by the code element's property menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeLanguage {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Ruby,
    Rust,
    Go,
    Java,
    C,
    Cpp,
    Bash,
    Sql,
    Html,
    Css,
    Json,
    Yaml,
}

impl CodeLanguage {
    pub fn label(&self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "JavaScript",
            CodeLanguage::TypeScript => "TypeScript",
            CodeLanguage::Python => "Python",
            CodeLanguage::Ruby => "Ruby",
            CodeLanguage::Rust => "Rust",
            CodeLanguage::Go => "Go",
            CodeLanguage::Java => "Java",
            CodeLanguage::C => "C",
            CodeLanguage::Cpp => "C++",
            CodeLanguage::Bash => "Bash",
            CodeLanguage::Sql => "SQL",
            CodeLanguage::Html => "HTML",
            CodeLanguage::Css => "CSS",
            CodeLanguage::Json => "JSON",
            CodeLanguage::Yaml => "YAML",
        }
    }

    pub fn all() -> &'static [CodeLanguage] {
        &[
            CodeLanguage::JavaScript,
            CodeLanguage::TypeScript,
            CodeLanguage::Python,
            CodeLanguage::Ruby,
            CodeLanguage::Rust,
            CodeLanguage::Go,
            CodeLanguage::Java,
            CodeLanguage::C,
            CodeLanguage::Cpp,
            CodeLanguage::Bash,
            CodeLanguage::Sql,
            CodeLanguage::Html,
            CodeLanguage::Css,
            CodeLanguage::Json,
            CodeLanguage::Yaml,
        ]
    }
}

/// Syntax themes offered by the code element's property menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeTheme {
    #[default]
    Tomorrow,
    TomorrowNight,
    Okaidia,
    SolarizedLight,
    Twilight,
}

impl CodeTheme {
    pub fn label(&self) -> &'static str {
        match self {
            CodeTheme::Tomorrow => "Tomorrow",
            CodeTheme::TomorrowNight => "Tomorrow Night",
            CodeTheme::Okaidia => "Okaidia",
            CodeTheme::SolarizedLight => "Solarized Light",
            CodeTheme::Twilight => "Twilight",
        }
    }

    pub fn all() -> &'static [CodeTheme] {
        &[
            CodeTheme::Tomorrow,
            CodeTheme::TomorrowNight,
            CodeTheme::Okaidia,
            CodeTheme::SolarizedLight,
            CodeTheme::Twilight,
        ]
    }
}

/// Positional and visual styling shared by all element kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            opacity: 1.0,
            text_decoration: None,
        }
    }
}

/// Properties of a canvas element. Which fields are meaningful depends on the
/// element kind; the store applies patches without caring.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProps {
    /// Textual content of text/code elements
    pub source: Option<String>,
    /// Fallback shown before the element was ever edited
    pub default_text: Option<String>,
    /// Image source (URL or data URI)
    pub src: Option<String>,
    /// Original file name for uploaded images
    pub image_name: Option<String>,
    /// Hyperlink target
    pub href: Option<String>,
    /// Syntax language for code elements
    pub language: Option<CodeLanguage>,
    /// Syntax theme for code elements
    pub theme: Option<CodeTheme>,
    pub font_size: Option<f32>,
    pub style: Style,
}

/// An element placed on a slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub props: ElementProps,
}

impl Element {
    pub fn text(source: impl Into<String>) -> Self {
        let (width, height) = DEFAULT_TEXT_SIZE;
        Self {
            kind: ElementKind::Text,
            props: ElementProps {
                source: Some(source.into()),
                default_text: Some(DEFAULT_TEXT.to_string()),
                style: Style {
                    width,
                    height,
                    ..Style::default()
                },
                ..ElementProps::default()
            },
        }
    }

    pub fn code() -> Self {
        let (width, height) = DEFAULT_CODE_SIZE;
        Self {
            kind: ElementKind::Code,
            props: ElementProps {
                default_text: Some(DEFAULT_CODE_TEXT.to_string()),
                language: Some(CodeLanguage::default()),
                theme: Some(CodeTheme::default()),
                font_size: Some(DEFAULT_FONT_SIZE),
                style: Style {
                    width,
                    height,
                    ..Style::default()
                },
                ..ElementProps::default()
            },
        }
    }

    pub fn image() -> Self {
        let (width, height) = DEFAULT_IMAGE_SIZE;
        Self {
            kind: ElementKind::Image,
            props: ElementProps {
                src: Some(DEFAULT_IMAGE_SRC.to_string()),
                style: Style {
                    width,
                    height,
                    ..Style::default()
                },
                ..ElementProps::default()
            },
        }
    }

    pub fn chart() -> Self {
        let (width, height) = DEFAULT_CHART_SIZE;
        Self {
            kind: ElementKind::Chart,
            props: ElementProps {
                style: Style {
                    width,
                    height,
                    ..Style::default()
                },
                ..ElementProps::default()
            },
        }
    }

    /// The text an edit session starts from: the committed source, falling
    /// back to the element's default text.
    pub fn edit_text(&self) -> String {
        self.props
            .source
            .clone()
            .or_else(|| self.props.default_text.clone())
            .unwrap_or_default()
    }
}

// ============================================================================
// Slides
// ============================================================================

/// How a slide background image is fitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundSize {
    #[default]
    Cover,
    Contain,
    Original,
    Stretch,
}

impl BackgroundSize {
    pub fn label(&self) -> &'static str {
        match self {
            BackgroundSize::Cover => "Cover",
            BackgroundSize::Contain => "Contain",
            BackgroundSize::Original => "Original",
            BackgroundSize::Stretch => "Stretch",
        }
    }

    pub fn all() -> &'static [BackgroundSize] {
        &[
            BackgroundSize::Cover,
            BackgroundSize::Contain,
            BackgroundSize::Original,
            BackgroundSize::Stretch,
        ]
    }
}

/// Entry/exit transitions a slide can opt into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    Slide,
    Zoom,
    Fade,
    Spin,
}

/// Visual styling of a slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideStyle {
    pub background_color: Option<String>,
    pub opacity: Option<f32>,
    pub background_size: Option<BackgroundSize>,
}

/// Properties of a slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideProps {
    pub style: SlideStyle,
    pub transition: Vec<Transition>,
    pub background_image_src: Option<String>,
    pub background_image_name: Option<String>,
}

/// A slide: ordered elements plus slide-level properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub props: SlideProps,
    pub elements: Vec<Element>,
}

// ============================================================================
// Patches
// ============================================================================

/// A partial update to an element's style. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub opacity: Option<f32>,
    pub text_decoration: Option<String>,
}

impl StylePatch {
    pub fn apply(&self, style: &mut Style) {
        if let Some(left) = self.left {
            style.left = left;
        }
        if let Some(top) = self.top {
            style.top = top;
        }
        if let Some(width) = self.width {
            style.width = width;
        }
        if let Some(height) = self.height {
            style.height = height;
        }
        if let Some(opacity) = self.opacity {
            style.opacity = opacity;
        }
        if let Some(ref deco) = self.text_decoration {
            style.text_decoration = Some(deco.clone());
        }
    }
}

/// A complete single-call delta against one element's properties.
///
/// Nullable fields use a double `Option`: the outer one means "touch this
/// field", the inner one is the new value (`None` clears it).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    pub source: Option<String>,
    pub src: Option<String>,
    pub image_name: Option<Option<String>>,
    pub href: Option<Option<String>>,
    pub language: Option<CodeLanguage>,
    pub theme: Option<CodeTheme>,
    pub font_size: Option<f32>,
    /// Natural width of a newly resolved image, applied to the style box
    pub width: Option<f32>,
    /// Natural height of a newly resolved image, applied to the style box
    pub height: Option<f32>,
    pub style: Option<StylePatch>,
}

impl ElementPatch {
    /// Patch carrying only a new text source, as issued by an edit commit.
    pub fn source(text: impl Into<String>) -> Self {
        Self {
            source: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn apply(&self, props: &mut ElementProps) {
        if let Some(ref source) = self.source {
            props.source = Some(source.clone());
        }
        if let Some(ref src) = self.src {
            props.src = Some(src.clone());
        }
        if let Some(ref image_name) = self.image_name {
            props.image_name = image_name.clone();
        }
        if let Some(ref href) = self.href {
            props.href = href.clone();
        }
        if let Some(language) = self.language {
            props.language = Some(language);
        }
        if let Some(theme) = self.theme {
            props.theme = Some(theme);
        }
        if let Some(font_size) = self.font_size {
            props.font_size = Some(font_size);
        }
        if let Some(width) = self.width {
            props.style.width = width;
        }
        if let Some(height) = self.height {
            props.style.height = height;
        }
        if let Some(ref style) = self.style {
            style.apply(&mut props.style);
        }
    }
}

/// A partial update to a slide's style.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideStylePatch {
    pub background_color: Option<String>,
    pub opacity: Option<f32>,
    pub background_size: Option<BackgroundSize>,
}

impl SlideStylePatch {
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none() && self.opacity.is_none() && self.background_size.is_none()
    }

    pub fn apply(&self, style: &mut SlideStyle) {
        if let Some(ref color) = self.background_color {
            style.background_color = Some(color.clone());
        }
        if let Some(opacity) = self.opacity {
            style.opacity = Some(opacity);
        }
        if let Some(size) = self.background_size {
            style.background_size = Some(size);
        }
    }
}

/// A complete single-call delta against one slide's properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePatch {
    pub style: Option<SlideStylePatch>,
    pub transition: Option<Vec<Transition>>,
    pub background_image_src: Option<Option<String>>,
    pub background_image_name: Option<Option<String>>,
}

impl SlidePatch {
    pub fn apply(&self, props: &mut SlideProps) {
        if let Some(ref style) = self.style {
            style.apply(&mut props.style);
        }
        if let Some(ref transition) = self.transition {
            props.transition = transition.clone();
        }
        if let Some(ref src) = self.background_image_src {
            props.background_image_src = src.clone();
        }
        if let Some(ref name) = self.background_image_name {
            props.background_image_name = name.clone();
        }
    }
}
