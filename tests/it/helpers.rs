//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDeckBuilder` - Builder pattern for creating decks with elements
//! - `RecordingSink` - captures store writes without applying them
//! - Scripted probes, files, and notification sinks for the upload flow

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use slideboard::deck::{Deck, DocumentSink};
use slideboard::images::{FileHandle, ImageProbe, ReadError, ResolveError};
use slideboard::notifications::{Notice, NotificationSink};
use slideboard::types::{Element, ElementPatch, SlidePatch};
use slideboard::upload::UploadEvent;

// ============================================================================
// TestDeckBuilder
// ============================================================================

/// Builder for decks with elements.
///
/// # Example
/// ```ignore
/// let deck = TestDeckBuilder::new()
///     .with_text_element("First note")
///     .with_code_element()
///     .selecting(0, 0)
///     .build();
/// ```
#[derive(Default)]
pub struct TestDeckBuilder {
    elements: Vec<Element>,
    extra_slides: usize,
    selection: Option<(usize, usize)>,
}

impl TestDeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text element to the first slide.
    pub fn with_text_element(mut self, text: impl Into<String>) -> Self {
        self.elements.push(Element::text(text.into()));
        self
    }

    /// Add a code element to the first slide.
    pub fn with_code_element(mut self) -> Self {
        self.elements.push(Element::code());
        self
    }

    /// Add an image element to the first slide.
    pub fn with_image_element(mut self) -> Self {
        self.elements.push(Element::image());
        self
    }

    /// Append this many empty slides after the first.
    pub fn with_extra_slides(mut self, count: usize) -> Self {
        self.extra_slides = count;
        self
    }

    /// Select an element after building.
    pub fn selecting(mut self, slide_index: usize, element_index: usize) -> Self {
        self.selection = Some((slide_index, element_index));
        self
    }

    pub fn build(self) -> Deck {
        let mut deck = Deck::new();
        for element in self.elements {
            deck.add_element(0, element);
        }
        for _ in 0..self.extra_slides {
            deck.add_slide();
        }
        deck.set_current_slide(0);
        if let Some((slide, element)) = self.selection {
            deck.select_element(slide, element);
        }
        deck
    }
}

// ============================================================================
// Store write recorder
// ============================================================================

/// Captures store writes without applying them.
#[derive(Default)]
pub struct RecordingSink {
    pub element_writes: Vec<(ElementPatch, Option<usize>, Option<usize>)>,
    pub slide_writes: Vec<SlidePatch>,
}

impl DocumentSink for RecordingSink {
    fn update_element_props(
        &mut self,
        patch: ElementPatch,
        slide_index: Option<usize>,
        element_index: Option<usize>,
    ) {
        self.element_writes.push((patch, slide_index, element_index));
    }

    fn update_slide_props(&mut self, patch: SlidePatch) {
        self.slide_writes.push(patch);
    }
}

// ============================================================================
// Scripted probes
// ============================================================================

/// Probe that resolves instantly with fixed dimensions.
pub struct FakeProbe {
    dims: (u32, u32),
    calls: AtomicUsize,
    last_src: Mutex<Option<String>>,
}

impl FakeProbe {
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            dims: (width, height),
            calls: AtomicUsize::new(0),
            last_src: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_src(&self) -> Option<String> {
        self.last_src.lock().clone()
    }
}

#[async_trait]
impl ImageProbe for FakeProbe {
    async fn probe(&self, src: &str) -> Result<(u32, u32), ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_src.lock() = Some(src.to_string());
        Ok(self.dims)
    }
}

/// Probe that always fails to load.
pub struct FailProbe {
    calls: AtomicUsize,
}

impl FailProbe {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProbe for FailProbe {
    async fn probe(&self, _src: &str) -> Result<(u32, u32), ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ResolveError::ImageLoadFailed)
    }
}

/// Probe whose calls take scripted amounts of (tokio) time, in call order.
/// Used with a paused clock to interleave completions deterministically.
pub struct SlowProbe {
    dims: (u32, u32),
    delays: Mutex<VecDeque<Duration>>,
    calls: AtomicUsize,
}

impl SlowProbe {
    pub fn new(width: u32, height: u32, delays: impl IntoIterator<Item = Duration>) -> Arc<Self> {
        Arc::new(Self {
            dims: (width, height),
            delays: Mutex::new(delays.into_iter().collect()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProbe for SlowProbe {
    async fn probe(&self, _src: &str) -> Result<(u32, u32), ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().pop_front().unwrap_or(Duration::ZERO);
        tokio::time::sleep(delay).await;
        Ok(self.dims)
    }
}

// ============================================================================
// Scripted files
// ============================================================================

/// In-memory file handle with a scripted read outcome.
pub struct FakeFile {
    name: String,
    size: u64,
    content: Result<String, ReadError>,
    reads: AtomicUsize,
}

impl FakeFile {
    pub fn new(name: &str, size: u64, data_uri: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            content: Ok(data_uri.to_string()),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &str, size: u64, err: ReadError) -> Self {
        Self {
            name: name.to_string(),
            size,
            content: Err(err),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileHandle for FakeFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.size
    }

    fn content_type(&self) -> &str {
        "image/png"
    }

    async fn read_as_data_uri(&self) -> Result<String, ReadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.content.clone()
    }
}

// ============================================================================
// Notification capture
// ============================================================================

/// Sink that records every notice it receives.
#[derive(Default)]
pub struct CountingSink {
    notices: Mutex<Vec<Notice>>,
}

impl CountingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl NotificationSink for CountingSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

// ============================================================================
// Event helpers
// ============================================================================

/// Drain every event currently queued on an upload receiver.
pub fn drain_events<T>(rx: &mut mpsc::UnboundedReceiver<UploadEvent<T>>) -> Vec<UploadEvent<T>> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
