use dropdown::{Dropdown, DropdownConfig, Selection};
use termdom::{EventResult, Key, PointerDownListeners, ScrollOffset};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn five() -> Dropdown {
    Dropdown::new(
        "dd",
        labels(&["All", "Location", "Size", "Type", "Date"]),
        PointerDownListeners::new(),
    )
}

/// Ten default options, three visible rows.
fn scrolling() -> Dropdown {
    let config = DropdownConfig {
        max_visible_rows: 3,
        ..Default::default()
    };
    Dropdown::from_config("dd", &config, PointerDownListeners::new()).unwrap()
}

// ============================================================================
// Open / Close
// ============================================================================

#[test]
fn test_initial_state() {
    let dd = five();

    assert!(!dd.is_open());
    assert_eq!(dd.focused(), None);
    assert_eq!(dd.selection(), &Selection::None);
    assert!(!dd.is_listening());
}

#[test]
fn test_toggle_keeps_focus() {
    let mut dd = five();
    dd.toggle_open();
    dd.handle_key(Key::Down);
    dd.handle_key(Key::Down);

    dd.toggle_open();
    assert!(!dd.is_open());
    dd.toggle_open();

    assert!(dd.is_open());
    assert_eq!(dd.focused(), Some(1));
}

// ============================================================================
// Arrow Keys
// ============================================================================

#[test]
fn test_arrow_down_from_nothing_starts_at_first() {
    let mut dd = five();
    dd.toggle_open();

    assert_eq!(dd.handle_key(Key::Down), EventResult::Consumed);
    assert_eq!(dd.focused(), Some(0));
}

#[test]
fn test_arrow_down_wraps_after_last() {
    let mut dd = five();
    dd.toggle_open();
    dd.pointer_enter(4);

    dd.handle_key(Key::Down);

    assert_eq!(dd.focused(), Some(0));
}

#[test]
fn test_arrow_up_wraps_before_first() {
    let mut dd = five();
    dd.toggle_open();
    dd.pointer_enter(0);

    assert_eq!(dd.handle_key(Key::Up), EventResult::Consumed);
    assert_eq!(dd.focused(), Some(4));
}

#[test]
fn test_arrow_up_from_nothing_lands_second_to_last() {
    let mut dd = five();
    dd.toggle_open();

    dd.handle_key(Key::Up);

    assert_eq!(dd.focused(), Some(3));
}

#[test]
fn test_arrow_up_from_nothing_single_option() {
    let mut dd = Dropdown::new("dd", labels(&["Only"]), PointerDownListeners::new());
    dd.toggle_open();

    dd.handle_key(Key::Up);

    assert_eq!(dd.focused(), Some(0));
}

#[test]
fn test_arrows_with_no_options() {
    let mut dd = Dropdown::new("dd", Vec::new(), PointerDownListeners::new());
    dd.toggle_open();

    assert_eq!(dd.handle_key(Key::Down), EventResult::Consumed);
    assert_eq!(dd.handle_key(Key::Up), EventResult::Consumed);
    assert_eq!(dd.focused(), None);
}

#[test]
fn test_arrows_move_focus_while_closed() {
    let mut dd = five();

    dd.handle_key(Key::Down);

    assert!(!dd.is_open());
    assert_eq!(dd.focused(), Some(0));
}

// ============================================================================
// Enter / Escape
// ============================================================================

#[test]
fn test_enter_without_focus_is_noop() {
    let mut dd = five();
    dd.toggle_open();

    assert_eq!(dd.handle_key(Key::Enter), EventResult::Ignored);
    assert!(dd.is_open());
    assert_eq!(dd.selection(), &Selection::None);
}

#[test]
fn test_enter_selects_focused_and_closes() {
    let mut dd = five();
    dd.toggle_open();
    dd.pointer_enter(3);

    assert_eq!(dd.handle_key(Key::Enter), EventResult::Consumed);
    assert_eq!(dd.selection(), &Selection::Selected("Type".into()));
    assert!(!dd.is_open());
    assert!(!dd.is_listening());
}

#[test]
fn test_escape_closes_and_keeps_focus_and_selection() {
    let mut dd = five();
    dd.select_option(1);
    dd.toggle_open();
    dd.pointer_enter(2);

    assert_eq!(dd.handle_key(Key::Escape), EventResult::Consumed);
    assert!(!dd.is_open());
    assert_eq!(dd.focused(), Some(2));
    assert_eq!(dd.selection().label(), Some("Location"));
}

#[test]
fn test_escape_while_closed_is_ignored() {
    let mut dd = five();

    assert_eq!(dd.handle_key(Key::Escape), EventResult::Ignored);
}

#[test]
fn test_other_keys_ignored() {
    let mut dd = five();
    dd.toggle_open();
    dd.pointer_enter(1);

    for key in [Key::Char('a'), Key::Tab, Key::Home, Key::Left] {
        assert_eq!(dd.handle_key(key), EventResult::Ignored);
    }
    assert!(dd.is_open());
    assert_eq!(dd.focused(), Some(1));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_option_duplicates_keep_label() {
    let mut dd = Dropdown::new("dd", labels(&["A", "B", "A"]), PointerDownListeners::new());

    assert!(dd.select_option(2));
    assert_eq!(dd.selection().label(), Some("A"));
}

#[test]
fn test_select_out_of_range_ignored() {
    let mut dd = five();
    dd.toggle_open();

    assert!(!dd.select_option(5));
    assert!(dd.is_open());
    assert_eq!(dd.selection(), &Selection::None);
}

#[test]
fn test_pointer_enter_out_of_range_ignored() {
    let mut dd = five();
    dd.toggle_open();
    dd.pointer_enter(2);

    dd.pointer_enter(9);

    assert_eq!(dd.focused(), Some(2));
}

// ============================================================================
// Scroll Into View
// ============================================================================

#[test]
fn test_viewport_size() {
    let dd = scrolling();

    assert_eq!(dd.viewport(), (22, 3));
    assert_eq!(five().viewport(), (22, 5));
}

#[test]
fn test_arrow_down_scrolls_focused_into_view() {
    let mut dd = scrolling();
    dd.toggle_open();

    for _ in 0..3 {
        dd.handle_key(Key::Down);
    }
    assert_eq!(dd.focused(), Some(2));
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 0));

    dd.handle_key(Key::Down);
    assert_eq!(dd.focused(), Some(3));
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 1));
}

#[test]
fn test_wrapping_scrolls_to_ends() {
    let mut dd = scrolling();
    dd.toggle_open();
    dd.pointer_enter(9);
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 7));

    dd.handle_key(Key::Down);
    assert_eq!(dd.focused(), Some(0));
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 0));

    dd.handle_key(Key::Up);
    assert_eq!(dd.focused(), Some(9));
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 7));
}

#[test]
fn test_hover_inside_viewport_does_not_scroll() {
    let mut dd = scrolling();
    dd.toggle_open();
    dd.pointer_enter(4);
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 2));

    dd.pointer_enter(3);

    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 2));
}

#[test]
fn test_reopen_reveals_focused_option() {
    let mut dd = scrolling();
    dd.toggle_open();
    dd.pointer_enter(8);
    dd.handle_key(Key::Escape);

    dd.toggle_open();

    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 6));
}

#[test]
fn test_scroll_by_clamps_to_content() {
    let mut dd = scrolling();
    assert!(!dd.scroll_by(1));
    dd.toggle_open();

    assert!(dd.scroll_by(100));
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 7));
    assert!(dd.scroll_by(-3));
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 4));
    dd.scroll_by(-10);
    assert_eq!(dd.scroll_offset(), ScrollOffset::new(0, 0));
    assert!(!dd.scroll_by(-1));
}
