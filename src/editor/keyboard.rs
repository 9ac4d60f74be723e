//! Keyboard shortcut routing.

use super::VisualEditor;

/// A key-down event as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value, e.g. `"s"`, `"Delete"`
    pub key: String,
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Ctrl, or Cmd on macOS
    pub fn command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Shortcuts the editor recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    Undo,
    Redo,
    DeleteElement,
}

/// What the router did with a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Shortcut that fired, `None` when the event passes through
    pub shortcut: Option<Shortcut>,
    /// Whether the host must suppress its default action (e.g. the save dialog)
    pub prevent_default: bool,
}

impl KeyOutcome {
    pub const PASS_THROUGH: KeyOutcome = KeyOutcome {
        shortcut: None,
        prevent_default: false,
    };

    pub fn is_handled(&self) -> bool {
        self.shortcut.is_some()
    }
}

impl VisualEditor {
    /// Route a key-down event.
    ///
    /// Ctrl/Cmd + S, Z, Y are intercepted and forwarded to the shortcut
    /// handler with the default suppressed. Delete removes the selected
    /// element when there is one. Everything else passes through.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> KeyOutcome {
        if event.command_modifier() {
            let shortcut = match event.key.as_str() {
                "s" => Some(Shortcut::Save),
                "z" => Some(Shortcut::Undo),
                "y" => Some(Shortcut::Redo),
                _ => None,
            };
            if let Some(shortcut) = shortcut {
                self.run_shortcut(shortcut);
                return KeyOutcome {
                    shortcut: Some(shortcut),
                    prevent_default: true,
                };
            }
        }

        if event.key == "Delete" && self.selection.is_some() {
            self.run_shortcut(Shortcut::DeleteElement);
            return KeyOutcome {
                shortcut: Some(Shortcut::DeleteElement),
                prevent_default: false,
            };
        }

        KeyOutcome::PASS_THROUGH
    }

    fn run_shortcut(&mut self, shortcut: Shortcut) {
        tracing::debug!(?shortcut, "shortcut");
        match shortcut {
            Shortcut::Save => self.shortcuts.save(&self.document),
            Shortcut::Undo => {
                self.shortcuts.undo(&mut self.document);
                self.revalidate_selection();
            }
            Shortcut::Redo => {
                self.shortcuts.redo(&mut self.document);
                self.revalidate_selection();
            }
            Shortcut::DeleteElement => {
                self.delete_selected_element();
            }
        }
    }
}
