//! Visual style of one element.
//!
//! Components name colours by theme slot (`Color::var("muted")`) so the same
//! tree renders under any [`Theme`](super::Theme). [`Style::fg`] and
//! [`Style::bg`] are shorthands for that common case.

use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Filled across the element's whole rect; `None` shows the parent's.
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    /// Falls back to `foreground` when unset.
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Foreground from the theme slot `slot`.
    pub fn fg(slot: &str) -> Self {
        Self::new().foreground(Color::var(slot))
    }

    /// Background from the theme slot `slot`.
    pub fn bg(slot: &str) -> Self {
        Self::new().background(Color::var(slot))
    }

    pub fn background(self, color: Color) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    pub fn foreground(self, color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..self
        }
    }

    /// Rounded, single or no frame. Borders take one cell on every side.
    pub fn border(self, border: Border) -> Self {
        Self { border, ..self }
    }

    pub fn border_color(self, color: Color) -> Self {
        Self {
            border_color: Some(color),
            ..self
        }
    }

    pub fn bold(self) -> Self {
        self.text(|t| t.bold())
    }

    pub fn dim(self) -> Self {
        self.text(|t| t.dim())
    }

    fn text(mut self, apply: impl FnOnce(TextStyle) -> TextStyle) -> Self {
        self.text_style = apply(self.text_style);
        self
    }
}
