//! Visual editor - drag-and-drop placement, selection and live editing of
//! elements on a canvas.
//!
//! The editor owns the [`Document`] it edits. Hosts feed it input events
//! (drag, drop, click, key down, panel edits) and read back the document and
//! the properties panel model.
//!
//! ## Modules
//!
//! - `drag_drop` - component templates as drag sources, drop zones on the canvas
//! - `selection` - single selection and click routing
//! - `properties` - properties panel model and typed element edits
//! - `keyboard` - save / undo / redo / delete shortcuts

mod drag_drop;
mod keyboard;
mod properties;
mod selection;

pub use drag_drop::{DataTransfer, DragState, DropEffect};
pub use keyboard::{KeyEvent, KeyOutcome, Shortcut};
pub use properties::{
    ColorProperty, ControlKind, ElementProperties, LengthProperty, PanelControl, PanelEdit,
    PropertiesPanel, Slider,
};
pub use selection::ClickBinding;

use crate::dom::{Document, NodeId};
use crate::settings::{EditorClasses, EditorSettings};
use std::collections::{HashMap, HashSet};

/// Receives the save / undo / redo shortcuts the editor intercepts.
///
/// The editor itself keeps no history; a host that wants these shortcuts to
/// do something supplies its own handler.
pub trait ShortcutHandler {
    fn save(&mut self, _document: &Document) {
        tracing::debug!("save shortcut has no handler");
    }

    fn undo(&mut self, _document: &mut Document) {
        tracing::debug!("undo shortcut has no handler");
    }

    fn redo(&mut self, _document: &mut Document) {
        tracing::debug!("redo shortcut has no handler");
    }
}

/// Handler used when the host installs none: every shortcut only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopShortcuts;

impl ShortcutHandler for NoopShortcuts {}

/// Construction options for [`VisualEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    pub classes: EditorClasses,
    /// Whether the host shows a properties panel at all
    pub properties_panel: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            classes: EditorClasses::default(),
            properties_panel: true,
        }
    }
}

impl EditorOptions {
    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            classes: settings.classes.clone(),
            ..Self::default()
        }
    }

    pub fn with_classes(mut self, classes: EditorClasses) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_properties_panel(mut self, enabled: bool) -> Self {
        self.properties_panel = enabled;
        self
    }
}

/// The visual element editor.
pub struct VisualEditor {
    document: Document,
    classes: EditorClasses,
    canvas: Option<NodeId>,
    /// Templates made draggable when the editor was set up
    components: HashSet<NodeId>,
    selection: Option<NodeId>,
    /// `None` when the host has no properties panel
    panel: Option<PropertiesPanel>,
    drag: DragState,
    click_bindings: HashMap<NodeId, ClickBinding>,
    shortcuts: Box<dyn ShortcutHandler>,
}

impl VisualEditor {
    /// Set up an editor over `document`: locate the canvas and make every
    /// component template draggable.
    pub fn new(document: Document, options: EditorOptions) -> Self {
        let canvas = document
            .elements_with_class(&options.classes.canvas)
            .first()
            .copied();
        if canvas.is_none() {
            tracing::warn!(class = %options.classes.canvas, "no canvas element, drops will be ignored");
        }

        let mut editor = Self {
            document,
            classes: options.classes,
            canvas,
            components: HashSet::new(),
            selection: None,
            panel: options
                .properties_panel
                .then(PropertiesPanel::placeholder),
            drag: DragState::default(),
            click_bindings: HashMap::new(),
            shortcuts: Box::new(NoopShortcuts),
        };
        let registered = editor.register_components();
        tracing::debug!(components = registered, canvas = ?editor.canvas, "editor initialized");
        editor
    }

    /// Build an editor from a page's markup with default options.
    pub fn from_markup(markup: &str) -> Self {
        Self::new(Document::from_markup(markup), EditorOptions::default())
    }

    pub fn with_shortcut_handler(mut self, handler: impl ShortcutHandler + 'static) -> Self {
        self.shortcuts = Box::new(handler);
        self
    }

    pub fn set_shortcut_handler(&mut self, handler: impl ShortcutHandler + 'static) {
        self.shortcuts = Box::new(handler);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct access for hosts that mutate the page outside the editor.
    /// Call [`VisualEditor::revalidate_selection`] afterwards if the selected
    /// element may have been removed.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn classes(&self) -> &EditorClasses {
        &self.classes
    }

    pub fn canvas(&self) -> Option<NodeId> {
        self.canvas
    }

    /// Markup of everything placed on the canvas, suitable as project content
    pub fn canvas_markup(&self) -> String {
        self.canvas
            .map(|canvas| self.document.inner_html(canvas))
            .unwrap_or_default()
    }

    /// Whether `node` is the canvas or lies inside it
    pub fn is_on_canvas(&self, node: NodeId) -> bool {
        let Some(canvas) = self.canvas else {
            return false;
        };
        self.document.contains(node)
            && (node == canvas || self.document.ancestors(node).any(|a| a == canvas))
    }

    /// Nodes from `node` up to and including the canvas, or `None` when
    /// `node` is not on the canvas.
    fn path_to_canvas(&self, node: NodeId) -> Option<Vec<NodeId>> {
        let canvas = self.canvas?;
        if !self.is_on_canvas(node) {
            return None;
        }
        let mut path = vec![node];
        if node != canvas {
            path.extend(self.document.ancestors(node).take_while(|&a| a != canvas));
            path.push(canvas);
        }
        Some(path)
    }
}
