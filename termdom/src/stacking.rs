//! Paint order shared by the renderer and hit testing.

use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};

/// An element with its stacking and clipping context.
pub(crate) struct StackItem<'a> {
    pub element: &'a Element,
    pub z_index: i16,
    pub tree_order: usize,
    pub projection: Projection,
}

/// Flatten the tree in paint order: ascending effective z_index, then tree
/// order. Children inherit their parent's z_index as a floor and are
/// clipped by ancestors whose overflow is not visible.
pub(crate) fn paint_order<'a>(
    root: &'a Element,
    layout: &LayoutResult,
    screen: Rect,
) -> Vec<StackItem<'a>> {
    let mut items = Vec::new();
    collect(
        root,
        layout,
        &mut items,
        root.z_index,
        Projection::new(screen, (0, 0)),
    );
    items.sort_by_key(|item| (item.z_index, item.tree_order));
    items
}

fn collect<'a>(
    element: &'a Element,
    layout: &LayoutResult,
    items: &mut Vec<StackItem<'a>>,
    parent_z_index: i16,
    projection: Projection,
) {
    let effective_z = element.z_index.max(parent_z_index);

    items.push(StackItem {
        element,
        z_index: effective_z,
        tree_order: items.len(),
        projection,
    });

    let Content::Children(children) = &element.content else {
        return;
    };

    let child_projection = match layout.get(&element.id) {
        Some(rect) if element.clips_children() => {
            let border_size = element.style.border_size();
            let inner = rect.shrink(
                element.padding.top + border_size,
                element.padding.right + border_size,
                element.padding.bottom + border_size,
                element.padding.left + border_size,
            );
            let (dx, dy) = element.scroll_offset;
            Projection::new(
                projection.visible(inner),
                (
                    projection.shift.0.saturating_add(dx),
                    projection.shift.1.saturating_add(dy),
                ),
            )
        }
        _ => projection,
    };

    for child in children {
        collect(child, layout, items, effective_z, child_projection);
    }
}

/// Maps layout coordinates to screen cells through the accumulated scroll
/// shift of scroll-container ancestors, limited to a screen-space clip.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Projection {
    pub clip: Rect,
    pub shift: (u16, u16),
}

impl Projection {
    pub fn new(clip: Rect, shift: (u16, u16)) -> Self {
        Self { clip, shift }
    }

    pub fn to_screen(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        let sx = x.checked_sub(self.shift.0)?;
        let sy = y.checked_sub(self.shift.1)?;
        self.clip.contains(sx, sy).then_some((sx, sy))
    }

    /// Screen-space part of a layout rect that survives shift and clip.
    pub fn visible(&self, rect: Rect) -> Rect {
        let x = rect.x.saturating_sub(self.shift.0);
        let y = rect.y.saturating_sub(self.shift.1);
        let right = rect.right().saturating_sub(self.shift.0);
        let bottom = rect.bottom().saturating_sub(self.shift.1);
        Rect::new(x, y, right - x, bottom - y).intersection(&self.clip)
    }
}
