use termdom::{Border, Color, Edges, Element, Overflow, Position, Size, Style};

use crate::events::INDEX_KEY;
use crate::state::Dropdown;

const SURFACE: Color = Color::oklch(0.279, 0.041, 260.031);
const BORDER: Color = Color::oklch(0.554, 0.046, 257.417);
const MUTED: Color = Color::oklch(0.704, 0.04, 256.788);
const TEXT: Color = Color::oklch(0.968, 0.007, 247.896);
const HIGHLIGHT: Color = Color::oklch(0.623, 0.214, 259.815);
const HIGHLIGHT_TEXT: Color = Color::rgb(255, 255, 255);

/// Stacks the open list above anything laid out after the dropdown.
const LIST_Z_INDEX: i16 = 100;

impl Dropdown {
    /// Build the element tree for the current state.
    pub fn element(&self) -> Element {
        log::trace!(
            "[dropdown:{}] build open={} focused={:?} scroll={:?}",
            self.id(),
            self.is_open(),
            self.focused(),
            self.scroll_offset()
        );

        let root = Element::box_()
            .id(self.id())
            .width(Size::Fixed(self.width()))
            .height(Size::Fixed(1))
            .child(self.trigger());

        if self.is_open() {
            root.child(self.list())
        } else {
            root
        }
    }

    fn trigger(&self) -> Element {
        let value = match self.selection().label() {
            Some(label) => Element::text(label).style(Style::new().foreground(TEXT)),
            None => Element::text(self.placeholder()).style(Style::new().foreground(MUTED).dim()),
        };
        let indicator = if self.is_open() { " ▲" } else { " ▼" };

        Element::row()
            .id(self.trigger_id())
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .focusable(true)
            .clickable(true)
            .style(Style::new().background(SURFACE))
            .child(
                value
                    .id(format!("{}-value", self.id()))
                    .width(Size::Fill)
                    .height(Size::Fixed(1)),
            )
            .child(
                Element::text(indicator)
                    .id(format!("{}-indicator", self.id()))
                    .style(Style::new().foreground(MUTED)),
            )
    }

    fn list(&self) -> Element {
        let rows = self.options().iter().enumerate().map(|(index, label)| {
            let style = if self.focused() == Some(index) {
                Style::new().background(HIGHLIGHT).foreground(HIGHLIGHT_TEXT)
            } else {
                Style::new().foreground(TEXT)
            };

            Element::text(label.as_str())
                .id(self.option_id(index))
                .width(Size::Fill)
                .height(Size::Fixed(1))
                .padding(Edges::horizontal(1))
                .clickable(true)
                .data(INDEX_KEY, index.to_string())
                .style(style)
        });

        let scroll = self.scroll_offset();

        Element::col()
            .id(self.list_id())
            .position(Position::Absolute)
            .top(1)
            .left(0)
            .width(Size::Fill)
            .max_height(self.max_visible_rows().saturating_add(2))
            .overflow(Overflow::Scroll)
            .scroll_offset(scroll.x, scroll.y)
            .z_index(LIST_Z_INDEX)
            .style(
                Style::new()
                    .background(SURFACE)
                    .foreground(BORDER)
                    .border(Border::Single),
            )
            .children(rows)
    }
}
