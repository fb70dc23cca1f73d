use egui::pos2;
use shape_mediator::{Canvas, Editor, EditorConfig, EditorError, Shape, ShapeKind, ToolId};

fn create_test_editor() -> Editor<Canvas> {
    Editor::new(Canvas::new(), &EditorConfig::default())
}

fn selected_ids(editor: &Editor<Canvas>) -> Vec<shape_mediator::ShapeId> {
    editor
        .registry()
        .iter()
        .filter(|shape| shape.is_selected())
        .map(Shape::id)
        .collect()
}

#[test]
fn test_overlapping_shapes_walkthrough() {
    let mut editor = create_test_editor();

    editor.select_tool(ToolId::Rect);
    editor.on_pointer_down(pos2(50.0, 50.0));
    editor.select_tool(ToolId::Circ);
    editor.on_pointer_down(pos2(55.0, 55.0));

    let ids: Vec<_> = editor.registry().iter().map(Shape::id).collect();
    let (rect, circle) = (ids[0], ids[1]);
    assert_eq!(editor.find_topmost(pos2(52.0, 52.0)), Some(circle));

    // Pick the circle on top
    editor.select_tool(ToolId::Pick);
    editor.on_pointer_down(pos2(52.0, 52.0));
    assert_eq!(editor.selection(), Some(circle));
    assert!(!editor.registry().get(rect).unwrap().is_selected());

    // Drag it away
    editor.on_pointer_drag(pos2(100.0, 100.0));
    assert_eq!(editor.registry().get(circle).unwrap().center(), pos2(100.0, 100.0));
    assert_eq!(editor.registry().get(rect).unwrap().center(), pos2(50.0, 50.0));

    // Fill it
    editor.select_tool(ToolId::Fill);
    editor.on_pointer_down(pos2(100.0, 100.0));
    assert!(editor.registry().get(circle).unwrap().is_filled());
    assert!(!editor.registry().get(rect).unwrap().is_filled());

    editor.clear();
    assert!(editor.registry().is_empty());
    assert_eq!(editor.selection(), None);
    assert!(editor.surface().is_empty());
}

#[test]
fn test_topmost_is_most_recent_overlapping_shape() {
    let mut editor = create_test_editor();
    editor.select_tool(ToolId::Rect);

    let query = pos2(100.0, 100.0);
    for i in 0..6 {
        let offset = 4.0 * i as f32;
        editor.on_pointer_down(pos2(90.0 + offset, 95.0 + offset));
        let newest = editor.registry().iter().last().unwrap().id();
        assert_eq!(editor.find_topmost(query), Some(newest));
    }

    // A shape that does not reach the query point never wins
    editor.on_pointer_down(pos2(400.0, 400.0));
    let covering = editor
        .registry()
        .iter()
        .filter(|shape| shape.contains(query))
        .last()
        .map(Shape::id);
    assert_eq!(editor.find_topmost(query), covering);
}

#[test]
fn test_pick_selects_exactly_the_topmost_shape() {
    let mut editor = create_test_editor();
    editor.select_tool(ToolId::Circ);
    for at in [pos2(50.0, 50.0), pos2(70.0, 60.0), pos2(200.0, 200.0)] {
        editor.on_pointer_down(at);
    }

    editor.select_tool(ToolId::Pick);
    for point in [
        pos2(60.0, 55.0),
        pos2(25.0, 50.0),
        pos2(210.0, 190.0),
        pos2(500.0, 10.0),
        pos2(75.0, 75.0),
    ] {
        editor.on_pointer_down(point);
        let expected = editor.find_topmost(point);
        assert_eq!(editor.selection(), expected);
        match expected {
            Some(id) => assert_eq!(selected_ids(&editor), vec![id]),
            None => assert!(selected_ids(&editor).is_empty()),
        }
    }
}

#[test]
fn test_creation_selects_new_shape_exclusively() {
    let mut editor = create_test_editor();
    editor.select_tool(ToolId::Rect);
    editor.on_pointer_down(pos2(50.0, 50.0));
    editor.select_tool(ToolId::Circ);
    editor.on_pointer_down(pos2(60.0, 50.0));

    let newest = editor.registry().iter().last().unwrap();
    assert_eq!(newest.kind(), ShapeKind::Circle);
    assert_eq!(selected_ids(&editor), vec![newest.id()]);
}

#[test]
fn test_events_on_empty_canvas_are_ignored() {
    let mut editor = create_test_editor();
    for tool in ToolId::ALL {
        if tool == ToolId::Rect || tool == ToolId::Circ {
            continue;
        }
        editor.select_tool(tool);
        editor.on_pointer_down(pos2(10.0, 10.0));
        editor.on_pointer_drag(pos2(20.0, 20.0));
    }
    assert!(editor.registry().is_empty());
    assert_eq!(editor.selection(), None);
    assert!(editor.surface().is_empty());
}

#[test]
fn test_unknown_tool_names_leave_editor_untouched() {
    let mut editor = create_test_editor();
    editor.select_tool(ToolId::Circ);
    editor.on_pointer_down(pos2(50.0, 50.0));

    for bad in ["lasso", "FILL", "", "circle"] {
        let result = editor.select_tool_by_name(bad);
        assert!(matches!(result, Err(EditorError::InvalidToolId(_))));
        assert_eq!(editor.active_tool(), ToolId::Circ);
    }
    assert!(!editor.selected_shape().unwrap().is_filled());

    for tool in ToolId::ALL {
        editor.select_tool_by_name(tool.name()).unwrap();
        assert_eq!(editor.active_tool(), tool);
    }
}

#[test]
fn test_deleted_selection_cannot_dangle() {
    let mut editor = create_test_editor();
    editor.select_tool(ToolId::Rect);
    editor.on_pointer_down(pos2(50.0, 50.0));
    let deleted = editor.delete_selection().unwrap();

    editor.on_pointer_down(pos2(50.0, 50.0));
    assert_ne!(editor.selection(), Some(deleted));

    editor.select_tool(ToolId::Pick);
    editor.on_pointer_down(pos2(500.0, 500.0));
    editor.on_pointer_drag(pos2(10.0, 10.0));
    assert_eq!(editor.registry().iter().next().unwrap().center(), pos2(50.0, 50.0));
}

#[test]
fn test_fill_click_targets_topmost_and_selects_it_exclusively() {
    let mut editor = create_test_editor();
    editor.select_tool(ToolId::Rect);
    for at in [pos2(50.0, 50.0), pos2(55.0, 55.0), pos2(300.0, 300.0)] {
        editor.on_pointer_down(at);
    }
    let ids: Vec<_> = editor.registry().iter().map(Shape::id).collect();
    let (lower, upper, far) = (ids[0], ids[1], ids[2]);
    assert_eq!(editor.selection(), Some(far));

    // Selecting the tool fills the far shape that is already selected
    editor.select_tool(ToolId::Fill);
    editor.on_pointer_down(pos2(52.0, 52.0));

    let filled: Vec<_> = editor.registry().iter().map(Shape::is_filled).collect();
    assert_eq!(filled, vec![false, true, true]);
    assert!(!editor.registry().get(lower).unwrap().is_filled());

    assert_eq!(editor.selection(), Some(upper));
    assert_eq!(selected_ids(&editor), vec![upper]);

    let canvas = editor.surface();
    let visible_handles = editor
        .registry()
        .iter()
        .flat_map(|shape| shape.handle_primitives())
        .filter(|handle| canvas.primitive(*handle).unwrap().visible)
        .count();
    assert_eq!(visible_handles, 4);
}
