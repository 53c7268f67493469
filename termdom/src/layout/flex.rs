use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Overflow, Position, Size};

/// Element id to its laid-out rect.
///
/// Descendants of a scroll container are stored in unscrolled content
/// coordinates; renderers and hit tests apply the container's offset.
pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let (flow_children, absolute_children): (Vec<&Element>, Vec<&Element>) = children
        .iter()
        .partition(|c| c.position != Position::Absolute);

    let border_size = element.style.border_size();
    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    let is_row = element.direction == Direction::Row;
    // Scroll containers give their children unbounded room on the main axis.
    let unbounded = element.overflow == Overflow::Scroll;
    let main_size = match (unbounded, is_row) {
        (true, true) => u16::MAX - inner.x,
        (true, false) => u16::MAX - inner.y,
        (false, true) => inner.width,
        (false, false) => inner.height,
    };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and fill count
    let gap_total = element
        .gap
        .saturating_mul(flow_children.len().saturating_sub(1) as u16);
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;

    for child in &flow_children {
        match main_axis_size(child, is_row, unbounded) {
            Some(n) => fixed_total = fixed_total.saturating_add(n),
            None => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Second pass: assign rects
    let mut offset = 0u16;

    for child in flow_children {
        let main = main_axis_size(child, is_row, unbounded).unwrap_or(fill_size);
        let main = if is_row {
            main
        } else {
            apply_max_height(main, child)
        };
        let main = main.min(main_size.saturating_sub(offset));

        let child_cross_size = if is_row { child.height } else { child.width };
        let cross = match child_cross_size {
            Size::Fixed(n) => n,
            Size::Fill => cross_size,
            Size::Auto => estimate_size(child, !is_row),
        };
        let cross = if is_row {
            apply_max_height(cross, child)
        } else {
            cross
        };
        let cross = cross.min(cross_size);

        let child_rect = if is_row {
            Rect::new(inner.x.saturating_add(offset), inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y.saturating_add(offset), cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }

    // Absolute children are placed relative to this element's rect.
    for child in absolute_children {
        let x = rect.x.saturating_add(child.left.unwrap_or(0));
        let y = rect.y.saturating_add(child.top.unwrap_or(0));
        let available = Rect::new(
            x,
            y,
            rect.width.saturating_sub(child.left.unwrap_or(0)),
            u16::MAX - y,
        );
        layout_element(child, available, result);
    }
}

/// Main-axis size of a flow child, or None when it shares leftover space.
fn main_axis_size(child: &Element, is_row: bool, unbounded: bool) -> Option<u16> {
    let size = if is_row { child.width } else { child.height };
    match size {
        Size::Fixed(n) => Some(n),
        Size::Auto => Some(estimate_size(child, is_row)),
        Size::Fill if unbounded => Some(estimate_size(child, is_row)),
        Size::Fill => None,
    }
}

fn apply_max_height(height: u16, element: &Element) -> u16 {
    element.max_height.map_or(height, |m| height.min(m))
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width),
    };

    let constrained = if is_width {
        base
    } else {
        apply_max_height(base, element)
    };

    constrained.min(available)
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border_size = element.style.border_size() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            let flow: Vec<&Element> = children
                .iter()
                .filter(|c| c.position != Position::Absolute)
                .collect();
            let along_main = (element.direction == Direction::Row) == is_width;
            if flow.is_empty() {
                0
            } else if along_main {
                let gap_total = element.gap.saturating_mul(flow.len() as u16 - 1);
                flow.iter()
                    .map(|c| child_extent(c, is_width))
                    .fold(gap_total, u16::saturating_add)
            } else {
                flow.iter()
                    .map(|c| child_extent(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    let total = content_size
        .saturating_add(padding)
        .saturating_add(border_size);

    if is_width {
        total
    } else {
        apply_max_height(total, element)
    }
}

fn child_extent(child: &Element, is_width: bool) -> u16 {
    match if is_width { child.width } else { child.height } {
        Size::Fixed(n) => n,
        _ => estimate_size(child, is_width),
    }
}
