//! Event routing for the dropdown.

use termdom::{contains, find_element, Element, Event, EventResult, Key, MouseButton};

use crate::state::Dropdown;

/// Data attribute carrying an option row's position in the list.
pub(crate) const INDEX_KEY: &str = "index";

impl Dropdown {
    /// Route a host event to the dropdown.
    ///
    /// `tree` is the element tree the event was resolved against; it must
    /// contain the dropdown's own element for clicks inside it to count as
    /// inside.
    pub fn on_event(&mut self, event: &Event, tree: &Element) -> EventResult {
        match event {
            Event::Click {
                target,
                element,
                button,
                ..
            } => {
                // Document-level listener runs for every pointer down
                if self.is_listening() {
                    self.outside_activation(tree, element.as_deref());
                }

                if *button != MouseButton::Left {
                    return EventResult::Ignored;
                }

                let Some(target) = target.as_deref() else {
                    return EventResult::Ignored;
                };

                if target == self.trigger_id() {
                    self.toggle_open();
                    return EventResult::Consumed;
                }

                match self.option_at(tree, target) {
                    Some(index) => {
                        self.select_option(index);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }

            Event::Key {
                target,
                key,
                modifiers,
            } => {
                if target.as_deref() != Some(self.trigger_id().as_str()) {
                    return EventResult::Ignored;
                }
                // Ignore keys with ctrl/alt modifiers
                if modifiers.ctrl || modifiers.alt {
                    return EventResult::Ignored;
                }

                let was_open = self.is_open();
                let result = self.handle_key(*key);

                // Enter and Space activate a closed trigger like a button
                if !was_open && matches!(key, Key::Enter | Key::Char(' ')) {
                    self.open();
                    return EventResult::Consumed;
                }

                result
            }

            Event::MouseMove { target, .. } => {
                if !self.is_open() {
                    return EventResult::Ignored;
                }
                match target.as_deref().and_then(|t| self.option_at(tree, t)) {
                    Some(index) => {
                        self.pointer_enter(index);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }

            Event::Scroll {
                target, delta_y, ..
            } => {
                let over_list = target
                    .as_deref()
                    .is_some_and(|t| contains(tree, &self.list_id(), t));
                if !self.is_open() || !over_list {
                    return EventResult::Ignored;
                }
                self.scroll_by(*delta_y);
                EventResult::Consumed
            }

            _ => EventResult::Ignored,
        }
    }

    /// Index of the option row `target`, if it belongs to this dropdown.
    fn option_at(&self, tree: &Element, target: &str) -> Option<usize> {
        if !contains(tree, &self.list_id(), target) {
            return None;
        }
        find_element(tree, target)?
            .get_data(INDEX_KEY)?
            .parse()
            .ok()
    }
}
