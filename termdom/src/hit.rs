use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::stacking::paint_order;

/// Find the clickable element a click at the given coordinates lands on:
/// the topmost element under the pointer or its nearest clickable ancestor.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let top = hit_test_any(layout, root, x, y)?;
    closest(root, &top, |el| el.clickable)
}

/// Find the topmost element (clickable or not) at the given coordinates.
///
/// Later elements in paint order win, so this is the deepest element under
/// the pointer unless a higher z_index overlay covers it.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let screen = Rect::new(0, 0, u16::MAX, u16::MAX);

    paint_order(root, layout, screen)
        .into_iter()
        .rev()
        .find(|item| {
            layout
                .get(&item.element.id)
                .is_some_and(|rect| item.projection.visible(*rect).contains(x, y))
        })
        .map(|item| item.element.id.clone())
}

/// Find the focusable element under the pointer: the topmost element or
/// its nearest focusable ancestor.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    let top = hit_test_any(layout, root, x, y)?;
    closest(root, &top, |el| el.focusable)
}

/// Nearest element on the path from `root` to `id` (inclusive, deepest
/// first) that satisfies `accept`.
fn closest(root: &Element, id: &str, accept: impl Fn(&Element) -> bool) -> Option<String> {
    let mut path = Vec::new();
    if !path_to(root, id, &mut path) {
        return None;
    }
    path.into_iter()
        .rev()
        .find(|el| accept(el))
        .map(|el| el.id.clone())
}

fn path_to<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            if path_to(child, id, path) {
                return true;
            }
        }
    }
    path.pop();
    false
}
