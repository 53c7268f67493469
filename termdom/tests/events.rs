use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CtMouseButton, MouseEvent, MouseEventKind,
};
use termdom::{
    collect_focusable, contains, find_element, hit_test, hit_test_any, hit_test_focusable,
    Element, Event, EventResult, FocusState, Key, LayoutResult, Modifiers, MouseButton, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// root (0,0,40,10) holding a focusable button and a plain label.
fn form() -> (Element, LayoutResult) {
    let root = Element::box_()
        .id("root")
        .child(
            Element::text("Press")
                .id("btn")
                .focusable(true)
                .clickable(true),
        )
        .child(Element::text("Name").id("label"))
        .child(Element::text("Other").id("other").focusable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 10)),
        ("btn", Rect::new(0, 0, 5, 1)),
        ("label", Rect::new(0, 1, 4, 1)),
        ("other", Rect::new(0, 2, 5, 1)),
    ]);

    (root, layout)
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_skips_non_clickable() {
    let (root, layout) = form();

    assert_eq!(hit_test(&layout, &root, 1, 1), None);
    assert_eq!(hit_test_any(&layout, &root, 1, 1), Some("label".to_string()));
}

#[test]
fn test_hit_test_focusable() {
    let (root, layout) = form();

    assert_eq!(
        hit_test_focusable(&layout, &root, 2, 2),
        Some("other".to_string())
    );
    assert_eq!(hit_test_focusable(&layout, &root, 2, 5), None);
}

#[test]
fn test_hit_test_bubbles_to_clickable_ancestor() {
    let root = Element::box_().id("root").child(
        Element::row()
            .id("row")
            .clickable(true)
            .focusable(true)
            .child(Element::text("label").id("label")),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 5)),
        ("row", Rect::new(0, 0, 20, 1)),
        ("label", Rect::new(2, 0, 5, 1)),
    ]);

    assert_eq!(hit_test_any(&layout, &root, 3, 0), Some("label".to_string()));
    assert_eq!(hit_test(&layout, &root, 3, 0), Some("row".to_string()));
    assert_eq!(
        hit_test_focusable(&layout, &root, 3, 0),
        Some("row".to_string())
    );
}

#[test]
fn test_hit_test_later_sibling_on_top() {
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn test_contains_is_inclusive() {
    let (root, _) = form();

    assert!(contains(&root, "root", "root"));
    assert!(contains(&root, "btn", "btn"));
}

#[test]
fn test_contains_descendants_only() {
    let (root, _) = form();

    assert!(contains(&root, "root", "label"));
    assert!(!contains(&root, "btn", "label"));
    assert!(!contains(&root, "btn", "root"));
}

#[test]
fn test_contains_unknown_ids() {
    let (root, _) = form();

    assert!(!contains(&root, "missing", "btn"));
    assert!(!contains(&root, "root", "missing"));
}

#[test]
fn test_find_element() {
    let (root, _) = form();

    assert_eq!(find_element(&root, "label").map(|e| e.id.as_str()), Some("label"));
    assert!(find_element(&root, "nope").is_none());
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_collect_focusable_in_tree_order() {
    let (root, _) = form();

    assert_eq!(collect_focusable(&root), vec!["btn", "other"]);
}

#[test]
fn test_tab_cycles_focus() {
    let (root, layout) = form();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "btn".into()
        }]
    );

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "btn".into()
            },
            Event::Focus {
                target: "other".into()
            },
        ]
    );

    focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(focus.focused(), Some("btn"));
}

#[test]
fn test_backtab_from_nothing_focuses_last() {
    let (root, layout) = form();
    let mut focus = FocusState::new();

    focus.process_events(&[key(KeyCode::BackTab)], &root, &layout);

    assert_eq!(focus.focused(), Some("other"));
}

#[test]
fn test_key_targets_focused_element() {
    let (root, layout) = form();
    let mut focus = FocusState::new();
    focus.focus("btn");

    let events = focus.process_events(&[key(KeyCode::Down)], &root, &layout);

    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("btn".into()),
            key: Key::Down,
            modifiers: Modifiers::new(),
        }]
    );
}

#[test]
fn test_key_release_ignored() {
    let (root, layout) = form();
    let mut focus = FocusState::new();
    let release = CrosstermEvent::Key(KeyEvent::new_with_kind(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));

    assert!(focus.process_events(&[release], &root, &layout).is_empty());
}

#[test]
fn test_modifiers_carried() {
    let (root, layout) = form();
    let mut focus = FocusState::new();
    let ctrl_c = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    let events = focus.process_events(&[ctrl_c], &root, &layout);

    assert_eq!(
        events,
        vec![Event::Key {
            target: None,
            key: Key::Char('c'),
            modifiers: Modifiers::ctrl(),
        }]
    );
}

#[test]
fn test_mouse_down_focuses_and_clicks() {
    let (root, layout) = form();
    let mut focus = FocusState::new();

    let events = focus.process_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 1, 0)],
        &root,
        &layout,
    );

    assert_eq!(
        events,
        vec![
            Event::Click {
                target: Some("btn".into()),
                element: Some("btn".into()),
                x: 1,
                y: 0,
                button: MouseButton::Left,
            },
            Event::Focus {
                target: "btn".into()
            },
        ]
    );
}

#[test]
fn test_mouse_down_elsewhere_blurs() {
    let (root, layout) = form();
    let mut focus = FocusState::new();
    focus.focus("btn");

    let events = focus.process_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 1, 1)],
        &root,
        &layout,
    );

    assert_eq!(
        events,
        vec![
            Event::Click {
                target: None,
                element: Some("label".into()),
                x: 1,
                y: 1,
                button: MouseButton::Left,
            },
            Event::Blur {
                target: "btn".into()
            },
        ]
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_mouse_move_does_not_move_focus() {
    let (root, layout) = form();
    let mut focus = FocusState::new();
    focus.focus("btn");

    let events = focus.process_events(&[mouse(MouseEventKind::Moved, 1, 2)], &root, &layout);

    assert_eq!(
        events,
        vec![Event::MouseMove {
            target: Some("other".into()),
            x: 1,
            y: 2,
        }]
    );
    assert_eq!(focus.focused(), Some("btn"));
}

#[test]
fn test_wheel_reports_delta() {
    let (root, layout) = form();
    let mut focus = FocusState::new();

    let events = focus.process_events(
        &[
            mouse(MouseEventKind::ScrollDown, 0, 5),
            mouse(MouseEventKind::ScrollUp, 0, 5),
        ],
        &root,
        &layout,
    );

    assert_eq!(
        events,
        vec![
            Event::Scroll {
                target: Some("root".into()),
                x: 0,
                y: 5,
                delta_x: 0,
                delta_y: 1,
            },
            Event::Scroll {
                target: Some("root".into()),
                x: 0,
                y: 5,
                delta_x: 0,
                delta_y: -1,
            },
        ]
    );
}

#[test]
fn test_resize_passed_through() {
    let (root, layout) = form();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[CrosstermEvent::Resize(120, 40)], &root, &layout);

    assert_eq!(
        events,
        vec![Event::Resize {
            width: 120,
            height: 40
        }]
    );
}

#[test]
fn test_programmatic_focus_and_blur() {
    let mut focus = FocusState::new();

    assert!(focus.focus("a"));
    assert!(!focus.focus("a"));
    assert!(focus.blur());
    assert!(!focus.blur());
}

#[test]
fn test_event_result_default_ignored() {
    assert_eq!(EventResult::default(), EventResult::Ignored);
    assert!(EventResult::Consumed.is_consumed());
}
