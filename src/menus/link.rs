//! Hyperlink editor for the selected element.
//!
//! Tracks the href input locally while typing; the store is only touched on
//! blur. `javascript:` URLs are flagged invalid and commit as no link.

use crate::deck::DocumentSink;
use crate::images::normalize_url;
use crate::types::{ElementPatch, StylePatch};

#[derive(Default)]
pub struct LinkEditor {
    value: String,
    invalid: bool,
}

impl LinkEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync from the store when the selected element changes.
    pub fn set_current(&mut self, href: Option<&str>) {
        if href != Some(self.value.as_str()) {
            self.value = href.unwrap_or_default().to_string();
            self.invalid = false;
        }
    }

    /// A keystroke in the href field. Script URLs are never accepted.
    pub fn on_change(&mut self, url: &str) {
        self.value = url.to_string();
        self.invalid = url.trim_start().to_ascii_lowercase().starts_with("javascript:");
    }

    /// Commit on blur: empty or invalid input clears the link, anything else
    /// is normalized. Targets the store's current element.
    pub fn on_blur(&mut self, sink: &mut dyn DocumentSink) {
        let href = if self.invalid || self.value.is_empty() {
            None
        } else {
            Some(normalize_url(&self.value))
        };
        sink.update_element_props(
            ElementPatch {
                href: Some(href),
                style: Some(StylePatch {
                    text_decoration: Some("none".to_string()),
                    ..StylePatch::default()
                }),
                ..ElementPatch::default()
            },
            None,
            None,
        );
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }
}
