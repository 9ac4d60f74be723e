//! Single selection and click routing for canvas elements.

use super::{PropertiesPanel, VisualEditor};
use crate::dom::NodeId;

/// Behaviour bound to a click on a canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickBinding {
    /// Select the clicked element and stop propagation
    Select,
}

impl VisualEditor {
    pub fn selected_element(&self) -> Option<NodeId> {
        self.selection
    }

    pub fn click_binding(&self, node: NodeId) -> Option<ClickBinding> {
        self.click_bindings.get(&node).copied()
    }

    /// Make `element` the single selected element.
    ///
    /// Every element currently carrying the marker class loses it first, so
    /// an inconsistent page with several marked elements is repaired too.
    /// Returns false when `element` is not a live element of the page.
    pub fn select_element(&mut self, element: NodeId) -> bool {
        if !self.document.is_element(element) || !self.document.is_connected(element) {
            tracing::debug!(?element, "ignoring selection of a detached node");
            return false;
        }

        let marker = self.classes.selected.clone();
        for marked in self.document.elements_with_class(&marker) {
            let _ = self.document.remove_class(marked, &marker);
        }
        if let Err(e) = self.document.add_class(element, &marker) {
            tracing::warn!(?element, error = %e, "could not mark selection");
            return false;
        }

        self.selection = Some(element);
        self.refresh_properties_panel();
        tracing::debug!(?element, "element selected");
        true
    }

    /// Remove the selected element from the page and clear the selection.
    /// Returns false when nothing was selected.
    pub fn delete_selected_element(&mut self) -> bool {
        let Some(element) = self.selection.take() else {
            return false;
        };

        let removed: Vec<NodeId> = std::iter::once(element)
            .chain(self.document.descendants(element))
            .collect();
        if let Err(e) = self.document.remove(element) {
            tracing::warn!(?element, error = %e, "selected element already gone");
        }
        for node in removed {
            self.click_bindings.remove(&node);
        }

        self.reset_properties_panel();
        tracing::info!(?element, "element deleted");
        true
    }

    /// Drop the selection if the selected element no longer exists, e.g.
    /// after a host edited the document directly.
    pub fn revalidate_selection(&mut self) {
        let Some(element) = self.selection else { return };
        if self.document.is_connected(element) {
            self.refresh_properties_panel();
            return;
        }
        self.selection = None;
        self.click_bindings.retain(|&n, _| self.document.contains(n));
        self.reset_properties_panel();
        tracing::debug!(?element, "selection cleared, element no longer on the page");
    }

    /// Route a click on `target` to the nearest bound element between the
    /// target and the canvas. The first binding found handles the click and
    /// stops propagation. Returns the element that handled it.
    pub fn click(&mut self, target: NodeId) -> Option<NodeId> {
        let path = self.path_to_canvas(target)?;
        let (element, binding) = path
            .into_iter()
            .find_map(|n| self.click_binding(n).map(|b| (n, b)))?;

        match binding {
            ClickBinding::Select => {
                self.select_element(element);
            }
        }
        Some(element)
    }

    fn reset_properties_panel(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            *panel = PropertiesPanel::placeholder();
        }
    }
}
