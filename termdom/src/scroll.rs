//! Viewport scrolling geometry.

use crate::layout::Rect;

/// Content offset of a scroll viewport, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Offset that makes `target` fully visible in a viewport of size
/// `viewport` (width, height), moving as little as possible.
///
/// `target` is in content coordinates relative to the viewport origin.
/// Each axis is handled independently: an already visible target leaves
/// the offset alone, otherwise the nearest edge is aligned. A target larger
/// than the viewport is aligned at its start.
pub fn scroll_into_view(viewport: (u16, u16), offset: ScrollOffset, target: Rect) -> ScrollOffset {
    ScrollOffset {
        x: nearest(offset.x, viewport.0, target.x, target.width),
        y: nearest(offset.y, viewport.1, target.y, target.height),
    }
}

fn nearest(offset: u16, view: u16, start: u16, len: u16) -> u16 {
    let end = start.saturating_add(len);
    let view_end = offset.saturating_add(view);

    if start < offset || len > view {
        start
    } else if end > view_end {
        end - view
    } else {
        offset
    }
}

/// Clamp `offset` so the viewport never scrolls past the content.
pub fn clamp_offset(offset: ScrollOffset, viewport: (u16, u16), content: (u16, u16)) -> ScrollOffset {
    ScrollOffset {
        x: offset.x.min(content.0.saturating_sub(viewport.0)),
        y: offset.y.min(content.1.saturating_sub(viewport.1)),
    }
}
