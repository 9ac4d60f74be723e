//! Selection Integration Tests
//!
//! Single selection, click routing and deletion.

use crate::helpers::{
    TestPageBuilder, assert_nothing_selected, assert_only_selected, drop_component,
    simple_editor, zone,
};
use pageforge::editor::{ClickBinding, DataTransfer, VisualEditor};

#[test]
fn test_nothing_selected_initially() {
    let editor = simple_editor();
    assert_nothing_selected(&editor);
    assert!(editor.properties_panel().unwrap().is_placeholder());
}

#[test]
fn test_select_moves_marker() {
    let mut editor = simple_editor();
    let first = drop_component(&mut editor, 0, 0);
    let second = drop_component(&mut editor, 0, 0);
    assert_only_selected(&editor, second);

    assert!(editor.select_element(first));
    assert_only_selected(&editor, first);
    assert!(!editor.document().has_class(second, "selected-element"));
}

#[test]
fn test_select_repairs_multiple_markers() {
    let mut editor = VisualEditor::from_markup(
        r#"<div class="editor-canvas"><div class="drop-zone"><p class="selected-element">a</p><p class="selected-element">b</p><p>c</p></div></div>"#,
    );
    let zone = editor.document().elements_with_class("drop-zone")[0];
    let third = editor.document().children(zone)[2];

    assert!(editor.select_element(third));
    assert_only_selected(&editor, third);
}

#[test]
fn test_reselecting_same_element_keeps_single_marker() {
    let mut editor = simple_editor();
    let element = drop_component(&mut editor, 0, 0);
    assert!(editor.select_element(element));
    assert!(editor.select_element(element));
    assert_only_selected(&editor, element);
    assert_eq!(editor.document().classes(element).len(), 2);
}

#[test]
fn test_select_detached_node_is_refused() {
    let mut editor = simple_editor();
    let loose = editor.document_mut().create_element("div");
    assert!(!editor.select_element(loose));
    assert_nothing_selected(&editor);
}

#[test]
fn test_click_on_dropped_element_selects_it() {
    let mut editor = TestPageBuilder::new()
        .with_component("<p>one</p>")
        .with_component("<p>two</p>")
        .with_drop_zones(1)
        .build();
    let first = drop_component(&mut editor, 0, 0);
    let second = drop_component(&mut editor, 1, 0);
    assert_only_selected(&editor, second);

    assert_eq!(editor.click(first), Some(first));
    assert_only_selected(&editor, first);
}

#[test]
fn test_click_on_descendant_bubbles_to_bound_element() {
    let mut editor = simple_editor();
    let element = drop_component(&mut editor, 0, 0);
    let heading = editor.document().element_children(element)[0];
    editor.select_element(editor.canvas().unwrap());

    assert_eq!(editor.click(heading), Some(element));
    assert_only_selected(&editor, element);
}

#[test]
fn test_nested_drop_click_stops_at_innermost() {
    let mut editor = simple_editor();
    let outer = editor
        .drop(
            zone(&editor, 0),
            &DataTransfer::html(r#"<div class="card"><div class="drop-zone slot"></div></div>"#),
        )
        .unwrap();
    // The dropped card holds a drop zone of its own
    let slot = editor.document().elements_with_class("slot")[0];
    let inner = editor
        .drop(slot, &DataTransfer::html("<span>leaf</span>"))
        .unwrap();
    assert_eq!(editor.document().parent(inner), Some(slot));

    editor.select_element(outer);
    assert_eq!(editor.click(inner), Some(inner));
    assert_only_selected(&editor, inner);
}

#[test]
fn test_click_on_unbound_canvas_content_does_nothing() {
    let mut editor = TestPageBuilder::new()
        .with_component("<p>x</p>")
        .with_drop_zone_containing("<p>static</p>")
        .build();
    let static_p = editor.document().element_children(zone(&editor, 0))[0];

    assert_eq!(editor.click(static_p), None);
    assert_nothing_selected(&editor);
}

#[test]
fn test_click_outside_canvas_does_nothing() {
    let mut editor = simple_editor();
    let palette = editor.document().elements_with_class("palette")[0];
    assert_eq!(editor.click(palette), None);
}

#[test]
fn test_dropped_element_has_select_binding() {
    let mut editor = simple_editor();
    let element = drop_component(&mut editor, 0, 0);
    assert_eq!(editor.click_binding(element), Some(ClickBinding::Select));
    assert_eq!(editor.click_binding(zone(&editor, 0)), None);
}

#[test]
fn test_delete_selected_element() {
    let mut editor = simple_editor();
    let element = drop_component(&mut editor, 0, 0);

    assert!(editor.delete_selected_element());

    assert!(!editor.document().contains(element));
    assert!(editor.document().children(zone(&editor, 0)).is_empty());
    assert_nothing_selected(&editor);
    assert_eq!(editor.click_binding(element), None);
    assert!(editor.properties_panel().unwrap().is_placeholder());
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut editor = simple_editor();
    let before = editor.canvas_markup();
    assert!(!editor.delete_selected_element());
    assert_eq!(editor.canvas_markup(), before);
}

#[test]
fn test_revalidate_after_external_removal() {
    let mut editor = simple_editor();
    let element = drop_component(&mut editor, 0, 0);

    editor.document_mut().remove(element).unwrap();
    editor.revalidate_selection();

    assert_eq!(editor.selected_element(), None);
    assert!(editor.properties_panel().unwrap().is_placeholder());
}

#[test]
fn test_revalidate_keeps_live_selection() {
    let mut editor = simple_editor();
    let element = drop_component(&mut editor, 0, 0);
    editor.revalidate_selection();
    assert_only_selected(&editor, element);
}
