//! Forces a commit when the edited element is deselected externally.
//!
//! Blur covers the common exit path, but selection can move for reasons the
//! edit surface never sees: another element clicked, the slide switched,
//! programmatic deselection. Without reconciliation those edits would either
//! vanish or land on whatever the store's current pointers happen to name.

use tokio::sync::watch;

use crate::deck::{Deck, DocumentSink};
use crate::edit::InlineEditor;
use crate::types::Selection;

/// Watches the store's selection and closes out orphaned edit sessions.
pub struct SelectionReconciler {
    rx: watch::Receiver<Selection>,
}

impl SelectionReconciler {
    pub fn new(rx: watch::Receiver<Selection>) -> Self {
        Self { rx }
    }

    /// Subscribe to a deck's selection changes.
    pub fn subscribe(deck: &Deck) -> Self {
        Self::new(deck.watch_selection())
    }

    /// Check for a selection change and, if the editor's session owner is no
    /// longer selected, force its commit. Returns whether a commit happened.
    pub fn poll(&mut self, editor: &mut InlineEditor, sink: &mut dyn DocumentSink) -> bool {
        if !self.rx.has_changed().unwrap_or(false) {
            return false;
        }
        let selection = *self.rx.borrow_and_update();
        Self::reconcile(selection, editor, sink)
    }

    /// Apply the deselection rule against one observed selection value.
    pub fn reconcile(
        selection: Selection,
        editor: &mut InlineEditor,
        sink: &mut dyn DocumentSink,
    ) -> bool {
        let Some(owner) = editor.owner() else {
            return false;
        };
        let still_selected = selection.slide_index == owner.slide_index
            && selection.element_index == Some(owner.element_index);
        if still_selected {
            return false;
        }
        tracing::debug!(
            slide = owner.slide_index,
            element = owner.element_index,
            "element deselected mid-edit, committing draft"
        );
        editor.commit(sink)
    }
}
