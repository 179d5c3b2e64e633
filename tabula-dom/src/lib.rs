//! Retained element tree for terminal components.
//!
//! Components build an [`Element`] tree every pass. The tree is laid out with
//! [`layout::layout`], painted into a [`Buffer`] with
//! [`render::render_to_buffer`] and queried with [`hit_test`] to route clicks
//! back to the element that was under the pointer.

pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use render::{render_to_buffer, render_to_string};
pub use terminal::Terminal;
pub use types::*;
