//! The inline-edit state machine.
//!
//! Entry is a two-step gesture: pointer-down on an already selected element
//! arms the machine, and a pointer-up on the same element without an
//! intervening drag enters edit mode. At that instant the owner address and
//! a draft snapshot are captured into an [`EditSession`], so a later commit
//! targets the element that was actually edited even if the store's current
//! pointers have moved since.

use crate::deck::{Deck, DocumentSink};
use crate::edit::{intercept, EditKey, KeyDirective, Modifiers};
use crate::types::{ElementAddress, ElementPatch};

/// One editing pass over an element. Exists only while editing, which makes
/// "editing but no draft" unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Where the commit goes, captured at entry time
    pub owner: ElementAddress,
    /// Live mirror of the edit surface's content
    pub draft: String,
}

/// The two representations of a text/code element.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EditState {
    /// Read-only rendering
    #[default]
    Display,
    /// The edit surface is live
    Editing { session: EditSession },
}

/// Host directive returned from a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerResponse {
    /// The event must not bubble to ancestor selection/drag handlers
    pub stop_propagation: bool,
}

/// Host directive returned when edit mode is entered: move focus into the
/// edit surface and place the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditStarted {
    /// Caret position in the draft (always the start of the text)
    pub caret: usize,
}

/// Drives the edit lifecycle of one canvas element.
#[derive(Default)]
pub struct InlineEditor {
    state: EditState,
    /// Pointer-down seen on the selected element; cleared by any pointer-up
    armed: bool,
}

impl InlineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// The address captured at edit entry, if editing.
    pub fn owner(&self) -> Option<ElementAddress> {
        match &self.state {
            EditState::Editing { session } => Some(session.owner),
            EditState::Display => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { session } => Some(&session.draft),
            EditState::Display => None,
        }
    }

    /// Pointer pressed on the element.
    pub fn pointer_down(&mut self, selected: bool) -> PointerResponse {
        if selected && !self.is_editing() {
            self.armed = true;
        }
        PointerResponse {
            // while editing, a press inside the surface must not reach
            // ancestor handlers and deselect the element under the user
            stop_propagation: self.is_editing(),
        }
    }

    /// Pointer released on the element. Enters edit mode when the arm is
    /// still valid: element still selected, no drag happened in between.
    pub fn pointer_up(&mut self, selected: bool, dragging: bool, deck: &Deck) -> Option<EditStarted> {
        let armed = std::mem::replace(&mut self.armed, false);
        if !armed || !selected || dragging || self.is_editing() {
            return None;
        }
        let element_index = deck.current_element_index()?;
        let slide_index = deck.current_slide_index();
        let draft = deck.element(slide_index, element_index)?.edit_text();
        self.state = EditState::Editing {
            session: EditSession {
                owner: ElementAddress {
                    slide_index,
                    element_index,
                },
                draft,
            },
        };
        Some(EditStarted { caret: 0 })
    }

    /// Mirror the edit surface's content into the draft. Local state only;
    /// nothing is committed yet.
    pub fn sync_draft(&mut self, text: &str) {
        if let EditState::Editing { session } = &mut self.state {
            session.draft = text.to_string();
        }
    }

    /// Finalize the edit: exactly one store write targeting the captured
    /// owner, then back to display. Returns whether a commit happened.
    pub fn commit(&mut self, sink: &mut dyn DocumentSink) -> bool {
        let EditState::Editing { session } = std::mem::take(&mut self.state) else {
            return false;
        };
        self.armed = false;
        sink.update_element_props(
            ElementPatch::source(session.draft),
            Some(session.owner.slide_index),
            Some(session.owner.element_index),
        );
        true
    }

    /// The edit surface lost focus.
    pub fn blur(&mut self, sink: &mut dyn DocumentSink) -> bool {
        self.commit(sink)
    }

    /// A key press on the edit surface. Commit is handled here; the other
    /// directives are returned for the host to apply to its surface.
    pub fn handle_key(
        &mut self,
        key: EditKey,
        mods: Modifiers,
        sink: &mut dyn DocumentSink,
    ) -> KeyDirective {
        let directive = intercept(key, mods);
        if directive == KeyDirective::Commit {
            self.commit(sink);
        }
        directive
    }
}
