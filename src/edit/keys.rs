//! Keyboard handling while an element is in edit mode.
//!
//! The edit surface owns its own undo stack, so the platform undo/redo
//! combinations must act on it natively and never reach the global history
//! handler. Escape finalizes the edit, and Tab inserts a literal tab instead
//! of moving focus.

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// The platform's primary shortcut modifier: Command on macOS, Control
    /// everywhere else.
    pub fn primary(&self) -> bool {
        #[cfg(target_os = "macos")]
        {
            self.meta
        }
        #[cfg(not(target_os = "macos"))]
        {
            self.ctrl
        }
    }
}

/// A key press delivered to the edit surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Escape,
    Tab,
    Char(char),
    Other,
}

/// What the host must do with an intercepted key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDirective {
    /// Not ours: let the edit surface handle it normally
    PassThrough,
    /// Undo within the edit surface; must not reach the global undo handler
    NativeUndo,
    /// Redo within the edit surface; must not reach the global redo handler
    NativeRedo,
    /// Finalize the edit (Escape)
    Commit,
    /// Insert a literal tab at the caret; suppress the focus change
    InsertTab,
}

impl KeyDirective {
    /// Whether the event must be swallowed (default suppressed, propagation
    /// stopped) instead of bubbling to ancestors.
    pub fn swallows_event(&self) -> bool {
        !matches!(self, KeyDirective::PassThrough)
    }
}

/// Classify a key press against the edit-mode intercept rules.
pub fn intercept(key: EditKey, mods: Modifiers) -> KeyDirective {
    match key {
        EditKey::Char(c) if mods.primary() && c.eq_ignore_ascii_case(&'z') => {
            if mods.shift {
                KeyDirective::NativeRedo
            } else {
                KeyDirective::NativeUndo
            }
        }
        EditKey::Escape => KeyDirective::Commit,
        EditKey::Tab => KeyDirective::InsertTab,
        _ => KeyDirective::PassThrough,
    }
}

/// Replace the selection `[start, end)` with a tab character, returning the
/// new text and caret position. Offsets are byte indices on char boundaries,
/// as reported by the edit surface.
pub fn insert_tab(text: &str, start: usize, end: usize) -> (String, usize) {
    let start = start.min(text.len());
    let end = end.clamp(start, text.len());
    let mut result = String::with_capacity(text.len() + 1);
    result.push_str(&text[..start]);
    result.push('\t');
    result.push_str(&text[end..]);
    (result, start + 1)
}
