//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestPageBuilder` - Builder for editor pages with a palette and a canvas
//! - Helper functions like `drop_component()`, `zone()`, `template()`
//! - Assertion helpers for the selection marker

use pageforge::dom::{Document, NodeId};
use pageforge::editor::{EditorOptions, VisualEditor};

// ============================================================================
// TestPageBuilder - Builder pattern for editor pages
// ============================================================================

/// Builder for an editor page: a palette of component templates, a canvas
/// holding drop zones, and a properties panel.
///
/// # Example
/// ```ignore
/// let mut editor = TestPageBuilder::new()
///     .with_component(r#"<button class="btn">Click</button>"#)
///     .with_drop_zones(2)
///     .build();
/// ```
pub struct TestPageBuilder {
    components: Vec<String>,
    zones: Vec<String>,
    canvas_extra: Vec<String>,
    properties_panel: bool,
}

impl Default for TestPageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPageBuilder {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            zones: Vec::new(),
            canvas_extra: Vec::new(),
            properties_panel: true,
        }
    }

    /// Add a palette template. `inner` is the markup inside the template
    /// wrapper, which carries the component class.
    pub fn with_component(mut self, inner: &str) -> Self {
        self.components
            .push(format!(r#"<div class="component-item">{}</div>"#, inner));
        self
    }

    /// Add `count` empty drop zones to the canvas.
    pub fn with_drop_zones(mut self, count: usize) -> Self {
        for i in 0..count {
            self.zones
                .push(format!(r#"<section class="drop-zone" data-zone="{}"></section>"#, i));
        }
        self
    }

    /// Add a drop zone with the given inner markup.
    pub fn with_drop_zone_containing(mut self, inner: &str) -> Self {
        self.zones
            .push(format!(r#"<section class="drop-zone">{}</section>"#, inner));
        self
    }

    /// Add markup to the canvas outside any drop zone.
    pub fn with_canvas_markup(mut self, markup: &str) -> Self {
        self.canvas_extra.push(markup.to_string());
        self
    }

    pub fn without_properties_panel(mut self) -> Self {
        self.properties_panel = false;
        self
    }

    pub fn markup(&self) -> String {
        format!(
            r#"<div class="editor-container"><aside class="palette">{}</aside><main class="editor-canvas">{}{}</main><aside class="editor-properties"></aside></div>"#,
            self.components.concat(),
            self.zones.concat(),
            self.canvas_extra.concat(),
        )
    }

    pub fn build(self) -> VisualEditor {
        let options = EditorOptions::default().with_properties_panel(self.properties_panel);
        VisualEditor::new(Document::from_markup(&self.markup()), options)
    }
}

// ============================================================================
// Standalone helper functions
// ============================================================================

/// Editor with one heading template and one drop zone.
pub fn simple_editor() -> VisualEditor {
    TestPageBuilder::new()
        .with_component("<h2>Heading</h2>")
        .with_drop_zones(1)
        .build()
}

/// The `index`-th palette template.
pub fn template(editor: &VisualEditor, index: usize) -> NodeId {
    editor.document().elements_with_class("component-item")[index]
}

/// The `index`-th drop zone.
pub fn zone(editor: &VisualEditor, index: usize) -> NodeId {
    editor.document().elements_with_class("drop-zone")[index]
}

/// Drag template `template_index` and drop it on zone `zone_index`.
pub fn drop_component(editor: &mut VisualEditor, template_index: usize, zone_index: usize) -> NodeId {
    let source = template(editor, template_index);
    let target = zone(editor, zone_index);
    let transfer = editor.drag_start(source).expect("template is draggable");
    editor.drop(target, &transfer).expect("drop on a drop zone succeeds")
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert that exactly `expected` carries the selection marker.
pub fn assert_only_selected(editor: &VisualEditor, expected: NodeId) {
    let marked = editor.document().elements_with_class("selected-element");
    assert_eq!(marked, vec![expected], "Expected only {:?} to be marked", expected);
    assert_eq!(editor.selected_element(), Some(expected));
}

/// Assert that nothing is selected or marked.
pub fn assert_nothing_selected(editor: &VisualEditor) {
    assert!(
        editor.document().elements_with_class("selected-element").is_empty(),
        "No element should carry the selection marker"
    );
    assert_eq!(editor.selected_element(), None);
}

// ============================================================================
// Tests for the helpers themselves
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_layout() {
        let editor = TestPageBuilder::new()
            .with_component("<p>a</p>")
            .with_component("<p>b</p>")
            .with_drop_zones(3)
            .build();

        assert_eq!(editor.document().elements_with_class("component-item").len(), 2);
        assert_eq!(editor.document().elements_with_class("drop-zone").len(), 3);
        assert!(editor.canvas().is_some());
    }

    #[test]
    fn test_builder_without_panel() {
        let editor = TestPageBuilder::new().without_properties_panel().build();
        assert!(editor.properties_panel().is_none());
    }
}
