//! The observable document store.
//!
//! A [`Deck`] holds the slide/element tree, tracks the current selection, and
//! applies property patches. Mutations are fire-and-forget single calls
//! carrying a complete delta; consumers that only need to write go through
//! the [`DocumentSink`] trait so tests can substitute a recorder.
//!
//! Selection changes are broadcast on a `tokio::sync::watch` channel, which
//! is what the edit reconciler subscribes to.

use tokio::sync::watch;

use crate::types::{Element, ElementPatch, Selection, Slide, SlidePatch};

/// Write-side of the document store.
///
/// Calls are fire-and-forget: no return value is consumed, and a call naming
/// a nonexistent target is ignored (logged, never fatal).
pub trait DocumentSink {
    /// Apply a patch to one element. `slide_index`/`element_index` default to
    /// the current selection when `None`.
    fn update_element_props(
        &mut self,
        patch: ElementPatch,
        slide_index: Option<usize>,
        element_index: Option<usize>,
    );

    /// Apply a patch to the current slide.
    fn update_slide_props(&mut self, patch: SlidePatch);
}

/// The slide document plus its selection state.
pub struct Deck {
    slides: Vec<Slide>,
    current_slide_index: usize,
    current_element_index: Option<usize>,
    revision: u64,
    selection_tx: watch::Sender<Selection>,
}

impl Deck {
    /// A deck always has at least one slide.
    pub fn new() -> Self {
        let (selection_tx, _) = watch::channel(Selection::none(0));
        Self {
            slides: vec![Slide::default()],
            current_slide_index: 0,
            current_element_index: None,
            revision: 0,
            selection_tx,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn current_element_index(&self) -> Option<usize> {
        self.current_element_index
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current_slide_index]
    }

    pub fn current_element(&self) -> Option<&Element> {
        let index = self.current_element_index?;
        self.current_slide().elements.get(index)
    }

    pub fn element(&self, slide_index: usize, element_index: usize) -> Option<&Element> {
        self.slides.get(slide_index)?.elements.get(element_index)
    }

    pub fn selection(&self) -> Selection {
        Selection {
            slide_index: self.current_slide_index,
            element_index: self.current_element_index,
        }
    }

    /// Bumped once per applied mutation. Lets callers (and tests) observe the
    /// at-most-one-write-per-event rule.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribe to selection changes. Only changes made after this call are
    /// observed.
    pub fn watch_selection(&self) -> watch::Receiver<Selection> {
        self.selection_tx.subscribe()
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append a new empty slide and make it current.
    pub fn add_slide(&mut self) -> usize {
        self.slides.push(Slide::default());
        let index = self.slides.len() - 1;
        self.set_current_slide(index);
        index
    }

    /// Append an element to a slide, returning its index.
    pub fn add_element(&mut self, slide_index: usize, element: Element) -> usize {
        let slide = &mut self.slides[slide_index];
        slide.elements.push(element);
        slide.elements.len() - 1
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Switch the current slide; any element selection is dropped.
    pub fn set_current_slide(&mut self, slide_index: usize) {
        if slide_index >= self.slides.len() {
            tracing::warn!(slide_index, "ignoring switch to nonexistent slide");
            return;
        }
        self.current_slide_index = slide_index;
        self.current_element_index = None;
        self.broadcast_selection();
    }

    pub fn select_element(&mut self, slide_index: usize, element_index: usize) {
        if self.element(slide_index, element_index).is_none() {
            tracing::warn!(
                slide_index,
                element_index,
                "ignoring selection of nonexistent element"
            );
            return;
        }
        self.current_slide_index = slide_index;
        self.current_element_index = Some(element_index);
        self.broadcast_selection();
    }

    pub fn deselect_element(&mut self) {
        self.current_element_index = None;
        self.broadcast_selection();
    }

    fn broadcast_selection(&self) {
        self.selection_tx.send_replace(self.selection());
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSink for Deck {
    fn update_element_props(
        &mut self,
        patch: ElementPatch,
        slide_index: Option<usize>,
        element_index: Option<usize>,
    ) {
        let slide_index = slide_index.unwrap_or(self.current_slide_index);
        let Some(element_index) = element_index.or(self.current_element_index) else {
            tracing::warn!("element update with no target element; ignoring");
            return;
        };
        let Some(element) = self
            .slides
            .get_mut(slide_index)
            .and_then(|slide| slide.elements.get_mut(element_index))
        else {
            tracing::warn!(slide_index, element_index, "element update target missing");
            return;
        };
        patch.apply(&mut element.props);
        self.revision += 1;
    }

    fn update_slide_props(&mut self, patch: SlidePatch) {
        let slide = &mut self.slides[self.current_slide_index];
        patch.apply(&mut slide.props);
        self.revision += 1;
    }
}
