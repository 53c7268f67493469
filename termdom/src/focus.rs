use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_any, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.cycle(root, true)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.cycle(root, false)
    }

    fn cycle(&mut self, root: &Element, forward: bool) -> Option<String> {
        let focusable = collect_focusable(root);
        let len = focusable.len();
        if len == 0 {
            return None;
        }

        let current = self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id));

        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        let new_focus = focusable[next].clone();
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Move focus to `new`, emitting Blur/Focus events for the transition.
    fn move_focus(&mut self, new: Option<String>, events: &mut Vec<Event>) {
        if self.focused == new {
            return;
        }
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur { target: old });
        }
        if let Some(target) = new {
            self.focused = Some(target.clone());
            events.push(Event::Focus { target });
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Pressing a mouse button focuses the focusable element under the
    /// pointer, or clears focus when there is none. Hovering never moves
    /// focus.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab || key == Key::BackTab {
                        let old = self.focused.clone();
                        let new = if key == Key::Tab {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        if let Some(new) = new {
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    match mouse_event.kind {
                        MouseEventKind::Down(button) => {
                            events.push(Event::Click {
                                target: hit_test(layout, root, x, y),
                                element: hit_test_any(layout, root, x, y),
                                x,
                                y,
                                button: button.into(),
                            });

                            let focusable = hit_test_focusable(layout, root, x, y);
                            log::trace!(
                                "[focus] pointer down at ({}, {}), focusable={:?}, current={:?}",
                                x,
                                y,
                                focusable,
                                self.focused
                            );
                            self.move_focus(focusable, &mut events);
                        }

                        MouseEventKind::Up(button) => {
                            events.push(Event::Release {
                                target: hit_test(layout, root, x, y),
                                x,
                                y,
                                button: button.into(),
                            });
                        }

                        MouseEventKind::Moved => {
                            events.push(Event::MouseMove {
                                target: hit_test_any(layout, root, x, y),
                                x,
                                y,
                            });
                        }

                        MouseEventKind::ScrollUp
                        | MouseEventKind::ScrollDown
                        | MouseEventKind::ScrollLeft
                        | MouseEventKind::ScrollRight => {
                            let (delta_x, delta_y) = match mouse_event.kind {
                                MouseEventKind::ScrollUp => (0, -1),
                                MouseEventKind::ScrollDown => (0, 1),
                                MouseEventKind::ScrollLeft => (-1, 0),
                                _ => (1, 0),
                            };
                            events.push(Event::Scroll {
                                target: hit_test_any(layout, root, x, y),
                                x,
                                y,
                                delta_x,
                                delta_y,
                            });
                        }

                        MouseEventKind::Drag(_) => {}
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Collect all focusable element IDs in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
