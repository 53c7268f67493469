use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::stacking::{paint_order, Projection};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let screen = Rect::from_size(buf.width(), buf.height());
    let render_list = paint_order(element, layout, screen);

    log::trace!("render: {} elements", render_list.len());

    for item in render_list {
        let Some(rect) = layout.get(&item.element.id) else {
            continue;
        };
        render_single_element(item.element, *rect, &item.projection, buf);
    }
}

fn render_single_element(element: &Element, rect: Rect, projection: &Projection, buf: &mut Buffer) {
    if let Some(bg) = &element.style.background {
        fill_rect(buf, projection.visible(rect), bg.to_rgb());
    }

    render_border(element, rect, projection, buf);

    if let Content::Text(text) = &element.content {
        render_text(text, element, rect, projection, buf);
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            // Backgrounds cover whatever was painted below
            buf.set(x, y, Cell::default().with_bg(bg));
        }
    }
}

fn put(buf: &mut Buffer, projection: &Projection, x: u16, y: u16, paint: impl FnOnce(&mut Cell)) {
    if let Some((sx, sy)) = projection.to_screen(x, y) {
        if let Some(cell) = buf.get_mut(sx, sy) {
            paint(cell);
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    rect: Rect,
    projection: &Projection,
    buf: &mut Buffer,
) {
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::WHITE);

    // Preserve existing background if no explicit background set
    let explicit_bg = element.style.background.as_ref().map(|c| c.to_rgb());

    let border_size = element.style.border_size();
    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    for (line_idx, line) in text.lines().enumerate() {
        let y = inner.y.saturating_add(line_idx as u16);
        if y >= inner.bottom() {
            break;
        }

        let visible = truncate_to_width(line, inner.width as usize);
        let mut x = inner.x;

        for ch in visible.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }

            put(buf, projection, x, y, |cell| {
                let bg = explicit_bg.unwrap_or(cell.bg);
                *cell = Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(element.style.text_style);
            });

            if width == 2 {
                put(buf, projection, x.saturating_add(1), y, |cell| {
                    let bg = explicit_bg.unwrap_or(cell.bg);
                    *cell = Cell {
                        wide_continuation: true,
                        ..Cell::new(' ').with_fg(fg).with_bg(bg)
                    };
                });
            }

            x = x.saturating_add(width);
        }
    }
}

fn render_border(element: &Element, rect: Rect, projection: &Projection, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::WHITE);

    let mut set_char = |x: u16, y: u16, ch: char| {
        put(buf, projection, x, y, |cell| {
            cell.char = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        });
    };

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    // Corners
    set_char(rect.x, rect.y, tl);
    set_char(right, rect.y, tr);
    set_char(rect.x, bottom, bl);
    set_char(right, bottom, br);

    for x in (rect.x + 1)..right {
        set_char(x, rect.y, h);
        set_char(x, bottom, h);
    }

    for y in (rect.y + 1)..bottom {
        set_char(rect.x, y, v);
        set_char(right, y, v);
    }
}
