//! Text input with label, helper text, clear button and password toggle.
//!
//! Like [`DataTable`](crate::data_table::DataTable), an [`InputField`] keeps
//! only interaction state (internal value, cursor, focus, password
//! visibility) and renders from [`InputFieldProps`] each pass. When
//! `value` is set the input is controlled: it shows that value and reports
//! edits through `on_change` without storing them.

mod events;
mod props;
mod view;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use props::{
    ChangeHandler, FocusHandler, InputFieldProps, InputKind, InputSize, InputVariant,
};

/// Unique identifier for an InputField instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// InputField component state.
#[derive(Debug, Clone)]
pub struct InputField {
    id: InputId,
    /// Value of an uncontrolled input
    internal: String,
    /// Cursor position in chars
    cursor: usize,
    focused: bool,
    show_password: bool,
}

impl InputField {
    /// Create an empty uncontrolled input.
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            internal: String::new(),
            cursor: 0,
            focused: false,
            show_password: false,
        }
    }

    /// Create an input whose internal value starts at `default_value`.
    pub fn from_props(props: &InputFieldProps<'_>) -> Self {
        let internal = props.default_value.unwrap_or_default().to_string();
        Self {
            cursor: internal.chars().count(),
            internal,
            ..Self::new()
        }
    }

    pub fn id(&self) -> InputId {
        self.id
    }

    /// Id of the input box element: the `id` prop, else the generated id.
    pub fn element_id(&self, props: &InputFieldProps<'_>) -> String {
        props.id.map_or_else(|| self.id.to_string(), str::to_string)
    }

    /// The displayed value.
    pub fn value<'s>(&'s self, props: &InputFieldProps<'s>) -> &'s str {
        props.value.unwrap_or(self.internal.as_str())
    }

    pub fn is_controlled(props: &InputFieldProps<'_>) -> bool {
        props.value.is_some()
    }

    /// Cursor position in chars, clamped to the displayed value.
    pub fn cursor(&self, props: &InputFieldProps<'_>) -> usize {
        let len = props.value.unwrap_or(self.internal.as_str()).chars().count();
        self.cursor.min(len)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}
