pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod listeners;
pub mod render;
pub mod scroll;
mod stacking;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{contains, find_element, Content, Element};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use listeners::{PointerDownListeners, Subscription};
pub use scroll::{scroll_into_view, ScrollOffset};
pub use terminal::Terminal;
pub use types::*;
