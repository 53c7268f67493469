//! Dropdown state and its transitions.

use termdom::scroll::clamp_offset;
use termdom::{
    contains, scroll_into_view, Element, EventResult, Key, PointerDownListeners, Rect,
    ScrollOffset, Subscription,
};

use crate::config::{ConfigError, DropdownConfig, MIN_WIDTH};
use crate::selection::Selection;

/// A single-select dropdown.
///
/// The list of options is fixed at construction. While the list is open the
/// dropdown holds a pointer-down subscription so an outside click can close
/// it; the subscription is released on close and when the dropdown is
/// dropped.
#[derive(Debug)]
pub struct Dropdown {
    id: String,
    options: Vec<String>,
    placeholder: String,
    width: u16,
    max_visible_rows: u16,
    open: bool,
    /// Highlighted option. `None` means nothing highlighted yet.
    focused: Option<usize>,
    selection: Selection,
    scroll: ScrollOffset,
    listeners: PointerDownListeners,
    subscription: Option<Subscription>,
}

impl Dropdown {
    pub fn new(
        id: impl Into<String>,
        options: Vec<String>,
        listeners: PointerDownListeners,
    ) -> Self {
        let defaults = DropdownConfig::default();
        Self {
            id: id.into(),
            options,
            placeholder: defaults.placeholder,
            width: defaults.width,
            max_visible_rows: defaults.max_visible_rows,
            open: false,
            focused: None,
            selection: Selection::None,
            scroll: ScrollOffset::default(),
            listeners,
            subscription: None,
        }
    }

    pub fn from_config(
        id: impl Into<String>,
        config: &DropdownConfig,
        listeners: PointerDownListeners,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(id, config.options.clone(), listeners)
            .with_placeholder(config.placeholder.clone())
            .with_width(config.width)
            .with_max_visible_rows(config.max_visible_rows))
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Total width in cells. Values below [`MIN_WIDTH`] are raised to it.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    pub fn with_max_visible_rows(mut self, rows: u16) -> Self {
        self.max_visible_rows = rows.max(1);
        self
    }

    // Accessors

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn list_id(&self) -> String {
        format!("{}-list", self.id)
    }

    pub fn option_id(&self, index: usize) -> String {
        format!("{}-option-{}", self.id, index)
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn max_visible_rows(&self) -> u16 {
        self.max_visible_rows
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    /// Whether the outside-click subscription is currently held.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Size of the list viewport (inside its border) in cells.
    pub fn viewport(&self) -> (u16, u16) {
        let rows = u16::try_from(self.options.len()).unwrap_or(u16::MAX);
        (
            self.width.saturating_sub(2),
            rows.min(self.max_visible_rows),
        )
    }

    // Transitions

    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Show the list. Keeps the highlighted option from before.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.subscription = Some(self.listeners.subscribe(self.id.clone()));
        // A freshly shown list starts at the top
        self.scroll = ScrollOffset::default();
        self.reveal_focused();
        log::debug!("[dropdown:{}] opened, focused={:?}", self.id, self.focused);
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.subscription = None;
        log::debug!("[dropdown:{}] closed", self.id);
    }

    /// Commit `options[index]` and close. Returns false for an index
    /// outside the list.
    pub fn select_option(&mut self, index: usize) -> bool {
        let Some(label) = self.options.get(index) else {
            log::debug!("[dropdown:{}] ignoring select of {}", self.id, index);
            return false;
        };
        log::debug!("[dropdown:{}] selected {} ({:?})", self.id, index, label);
        self.selection = Selection::Selected(label.clone());
        self.close();
        true
    }

    /// Apply a navigation key.
    ///
    /// `Consumed` means the host should skip its default handling for the
    /// key.
    pub fn handle_key(&mut self, key: Key) -> EventResult {
        let len = self.options.len() as i64;
        let cursor = self.focused.map_or(-1, |i| i as i64);

        match key {
            Key::Down => {
                if len > 0 {
                    self.set_focused((cursor + 1).rem_euclid(len));
                }
                EventResult::Consumed
            }
            Key::Up => {
                if len > 0 {
                    self.set_focused((cursor - 1 + len).rem_euclid(len));
                }
                EventResult::Consumed
            }
            Key::Enter => match self.focused {
                Some(index) => {
                    self.select_option(index);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            Key::Escape => {
                // Highlight survives so navigation resumes where it left off
                if self.open {
                    self.close();
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }

    /// Highlight the option under the pointer.
    pub fn pointer_enter(&mut self, index: usize) {
        if index < self.options.len() {
            self.set_focused(index as i64);
        }
    }

    /// Close the list when a pointer-down lands outside the dropdown.
    ///
    /// `target` is the element under the pointer in `tree`; `None` means the
    /// pointer hit no element at all. Returns whether the list closed.
    pub fn outside_activation(&mut self, tree: &Element, target: Option<&str>) -> bool {
        if self.subscription.is_none() {
            return false;
        }
        if target.is_some_and(|t| contains(tree, &self.id, t)) {
            return false;
        }
        log::debug!("[dropdown:{}] pointer down outside ({:?})", self.id, target);
        self.close();
        true
    }

    /// Scroll the open list by `delta` rows, clamped to its content.
    /// Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: i16) -> bool {
        if !self.open {
            return false;
        }
        let y = if delta < 0 {
            self.scroll.y.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.y.saturating_add(delta.unsigned_abs())
        };
        let viewport = self.viewport();
        let content = (
            viewport.0,
            u16::try_from(self.options.len()).unwrap_or(u16::MAX),
        );
        let next = clamp_offset(ScrollOffset::new(self.scroll.x, y), viewport, content);
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    fn set_focused(&mut self, index: i64) {
        let index = usize::try_from(index).ok();
        if self.focused == index {
            return;
        }
        log::trace!("[dropdown:{}] focus {:?} -> {:?}", self.id, self.focused, index);
        self.focused = index;
        self.reveal_focused();
    }

    /// Scroll the list so the highlighted option is fully visible.
    fn reveal_focused(&mut self) {
        let Some(index) = self.focused else {
            return;
        };
        if !self.open {
            return;
        }
        let viewport = self.viewport();
        let row = u16::try_from(index).unwrap_or(u16::MAX);
        self.scroll = scroll_into_view(viewport, self.scroll, Rect::new(0, row, viewport.0, 1));
    }
}
