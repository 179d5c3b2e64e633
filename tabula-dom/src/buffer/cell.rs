use crate::types::{Rgb, TextStyle};

const WHITE: Rgb = Rgb::new(255, 255, 255);

/// One terminal cell.
///
/// A double-width glyph occupies its own cell plus a `wide_continuation`
/// cell to the right, which the terminal writer skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    /// `None` leaves the terminal's own background showing.
    pub bg: Option<Rgb>,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Cell {
    /// An unpainted cell.
    pub const BLANK: Cell = Cell::new(' ');

    pub const fn new(char: char) -> Self {
        Self {
            char,
            fg: WHITE,
            bg: None,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }

    /// `char` in `fg` over `bg`.
    pub const fn painted(char: char, fg: Rgb, bg: Option<Rgb>) -> Self {
        Self {
            fg,
            bg,
            ..Self::new(char)
        }
    }

    /// Right half of a double-width glyph painted at the cell to its left.
    pub const fn continuation(fg: Rgb, bg: Option<Rgb>) -> Self {
        Self {
            wide_continuation: true,
            ..Self::painted(' ', fg, bg)
        }
    }

    pub const fn with_style(self, style: TextStyle) -> Self {
        Self { style, ..self }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
