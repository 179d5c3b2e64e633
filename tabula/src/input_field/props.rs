//! Input props and variants.

use serde::{Deserialize, Serialize};

use crate::config::InputOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    /// Surface background, border only shows state.
    Filled,
    #[default]
    Outlined,
    /// No background, border only shows state.
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Horizontal padding inside the input box.
    pub fn padding(self) -> u16 {
        match self {
            InputSize::Sm => 0,
            InputSize::Md => 1,
            InputSize::Lg => 2,
        }
    }
}

/// Input type. Only `Password` changes behaviour; the rest are carried as
/// the `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Date,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Number => "number",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
            InputKind::Date => "date",
        }
    }
}

pub type ChangeHandler<'a> = Box<dyn FnMut(&str) + 'a>;
pub type FocusHandler<'a> = Box<dyn FnMut() + 'a>;

/// Everything an [`InputField`](super::InputField) renders from.
pub struct InputFieldProps<'a> {
    /// Controlled value. When set, it is what the input shows.
    pub value: Option<&'a str>,
    /// Seed for the internal value of an uncontrolled input.
    pub default_value: Option<&'a str>,
    pub on_change: Option<ChangeHandler<'a>>,
    pub on_focus: Option<FocusHandler<'a>>,
    pub on_blur: Option<FocusHandler<'a>>,

    pub label: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    /// Shown instead of the helper text and marks the input invalid.
    pub error_message: Option<&'a str>,

    pub disabled: bool,
    pub invalid: bool,
    /// Shows a spinner and blocks editing.
    pub loading: bool,
    pub required: bool,
    pub read_only: bool,

    pub variant: InputVariant,
    pub size: InputSize,
    pub kind: InputKind,

    pub show_clear_button: bool,
    pub show_password_toggle: bool,

    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub class: Option<&'a str>,
}

impl Default for InputFieldProps<'_> {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            required: false,
            read_only: false,
            variant: InputVariant::Outlined,
            size: InputSize::Md,
            kind: InputKind::Text,
            show_clear_button: false,
            show_password_toggle: false,
            id: None,
            name: None,
            class: None,
        }
    }
}

impl<'a> InputFieldProps<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply presentation defaults loaded from config.
    pub fn options(mut self, options: &InputOptions) -> Self {
        self.variant = options.variant;
        self.size = options.size;
        self.show_clear_button = options.show_clear_button;
        self.show_password_toggle = options.show_password_toggle;
        self
    }

    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    pub fn default_value(mut self, value: &'a str) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&str) + 'a) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_focus(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_focus = Some(Box::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn helper_text(mut self, text: &'a str) -> Self {
        self.helper_text = Some(text);
        self
    }

    pub fn error_message(mut self, message: &'a str) -> Self {
        self.error_message = Some(message);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn show_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Non-empty error message.
    pub(crate) fn error_text(&self) -> Option<&'a str> {
        self.error_message.filter(|m| !m.is_empty())
    }

    pub(crate) fn has_error(&self) -> bool {
        self.invalid || self.error_text().is_some()
    }

    /// Error message, else helper text.
    pub(crate) fn message(&self) -> Option<&'a str> {
        self.error_text()
            .or(self.helper_text.filter(|t| !t.is_empty()))
    }

    /// Whether the input accepts focus and button clicks.
    pub(crate) fn interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Whether the value may change.
    pub(crate) fn editable(&self) -> bool {
        self.interactive() && !self.read_only
    }
}
