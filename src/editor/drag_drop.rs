//! Drag sources and drop handling.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingComponent   (drag start on a registered template)
//! DraggingComponent -> Idle   (drop or drag end)
//! ```

use super::{ClickBinding, VisualEditor};
use crate::constants::TRANSFER_FORMAT;
use crate::dom::NodeId;

/// Payload carried by a drag operation, keyed by format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfer holding `markup` as `text/html`
    pub fn html(markup: impl Into<String>) -> Self {
        let mut transfer = Self::new();
        transfer.set_data(TRANSFER_FORMAT, markup);
        transfer
    }

    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.items.iter_mut().find(|(f, _)| f == format) {
            Some(slot) => slot.1 = data,
            None => self.items.push((format.to_string(), data)),
        }
    }

    /// Data for `format`, empty when absent
    pub fn get_data(&self, format: &str) -> &str {
        self.items
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, d)| d.as_str())
            .unwrap_or("")
    }

    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(f, _)| f.as_str())
    }
}

/// Feedback a drop target gives while something is dragged over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    None,
    Copy,
}

/// Drag state of the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,

    /// A component template is being dragged
    DraggingComponent {
        /// Template the drag started on
        source: NodeId,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingComponent { .. })
    }

    /// Template being dragged, if any
    pub fn dragged_component(&self) -> Option<NodeId> {
        match self {
            Self::DraggingComponent { source } => Some(*source),
            Self::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

impl VisualEditor {
    /// Make every component template in the document draggable. Templates
    /// found on an earlier call are kept. Returns how many are registered.
    pub fn register_components(&mut self) -> usize {
        let templates = self.document.elements_with_class(&self.classes.component);
        for template in templates {
            if self.is_on_canvas(template) {
                // Dropped copies carry the template class but are not sources
                continue;
            }
            if let Err(e) = self.document.set_attribute(template, "draggable", "true") {
                tracing::warn!(?template, error = %e, "could not mark component draggable");
                continue;
            }
            self.components.insert(template);
        }
        self.components.retain(|&c| self.document.contains(c));
        self.components.len()
    }

    pub fn is_component(&self, node: NodeId) -> bool {
        self.components.contains(&node)
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Start dragging the template at (or around) `target`. The template's
    /// outer markup becomes the transfer payload.
    pub fn drag_start(&mut self, target: NodeId) -> Option<DataTransfer> {
        let source = self
            .document
            .closest(target, |_, n| self.components.contains(&n))?;
        let markup = self.document.outer_html(source);
        tracing::debug!(?source, bytes = markup.len(), "drag start");
        self.drag = DragState::DraggingComponent { source };
        Some(DataTransfer::html(markup))
    }

    /// Drop effect to report while dragging over `target`.
    pub fn drag_over(&self, target: NodeId) -> DropEffect {
        if self.is_on_canvas(target) {
            DropEffect::Copy
        } else {
            DropEffect::None
        }
    }

    /// Drag cancelled or finished outside the canvas
    pub fn drag_end(&mut self) {
        self.drag.reset();
    }

    /// Handle a drop on `target`.
    ///
    /// The nearest drop zone at or above `target` (without leaving the canvas)
    /// receives a new element parsed from the payload; the element becomes
    /// clickable and is selected. Drops outside any drop zone, or carrying no
    /// element, are ignored. Returns the new element.
    pub fn drop(&mut self, target: NodeId, transfer: &DataTransfer) -> Option<NodeId> {
        self.drag.reset();

        let Some(zone) = self.drop_zone_for(target) else {
            tracing::debug!(?target, "drop outside a drop zone ignored");
            return None;
        };

        let element = self.create_element(transfer.get_data(TRANSFER_FORMAT))?;
        if let Err(e) = self.document.append_child(zone, element) {
            tracing::warn!(?zone, error = %e, "could not place dropped element");
            let _ = self.document.remove(element);
            return None;
        }
        tracing::info!(?element, ?zone, "component dropped");
        self.select_element(element);
        Some(element)
    }

    fn drop_zone_for(&self, target: NodeId) -> Option<NodeId> {
        self.path_to_canvas(target)?
            .into_iter()
            .find(|&n| self.document.has_class(n, &self.classes.drop_zone))
    }

    /// Materialise the first element of `markup` and bind its click handler.
    fn create_element(&mut self, markup: &str) -> Option<NodeId> {
        let parsed = self.document.parse_fragment(markup);
        let element = parsed.iter().copied().find(|&n| self.document.is_element(n));
        for stray in parsed.into_iter().filter(|&n| Some(n) != element) {
            let _ = self.document.remove(stray);
        }
        let Some(element) = element else {
            tracing::debug!("drop payload holds no element");
            return None;
        };
        self.click_bindings.insert(element, ClickBinding::Select);
        Some(element)
    }
}
