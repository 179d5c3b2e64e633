//! Column descriptors and cell rendering dispatch.

use std::fmt;
use std::sync::Arc;

use tabula_dom::{Element, Size, TextAlign, TextWrap};

use crate::record::Record;
use crate::value::Value;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Alignment> for TextAlign {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Left => TextAlign::Left,
            Alignment::Center => TextAlign::Center,
            Alignment::Right => TextAlign::Right,
        }
    }
}

/// Horizontal space a column takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnWidth {
    /// Equal share of the width left after fixed columns.
    #[default]
    Auto,
    /// Exact width in terminal columns.
    Fixed(u16),
    /// Weighted share of the width left after fixed columns.
    Flex(u16),
}

impl From<ColumnWidth> for Size {
    fn from(width: ColumnWidth) -> Self {
        match width {
            ColumnWidth::Auto => Size::Fill,
            ColumnWidth::Fixed(n) => Size::Fixed(n),
            ColumnWidth::Flex(weight) => Size::Flex(weight),
        }
    }
}

/// Custom cell content: `(value, row, row_index) -> content`.
///
/// The element returned is placed in the cell verbatim.
pub type CellRenderer<T> = Arc<dyn Fn(&Value, &T, usize) -> Element + Send + Sync>;

/// Column configuration.
///
/// # Examples
///
/// ```
/// use tabula::prelude::*;
/// use tabula::tabula_dom::Element;
///
/// let columns: Vec<Column<Row>> = vec![
///     Column::new("id", "ID", "id").width(ColumnWidth::Fixed(6)).align(Alignment::Right),
///     Column::new("name", "Name", "name").sortable(),
///     Column::new("status", "Status", "status")
///         .render(|value, _row, _index| Element::text(format!("[{value}]"))),
/// ];
/// assert!(columns[1].sortable);
/// ```
pub struct Column<T> {
    /// Identifies the column for sort state; unique within a table.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Record field the cell reads.
    pub field: String,
    pub sortable: bool,
    pub renderer: Option<CellRenderer<T>>,
    pub align: Alignment,
    pub width: ColumnWidth,
    /// Free-form style class, carried into the header and cell `class` data.
    pub class: Option<String>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            field: field.into(),
            sortable: false,
            renderer: None,
            align: Alignment::Left,
            width: ColumnWidth::Auto,
            class: None,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show a sort indicator in the header and respond to
    /// clicks on it.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Render cells with `renderer` instead of the stringified value.
    ///
    /// Clicks on clickable elements the renderer returns still report the
    /// row through `on_row_click`.
    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value, &T, usize) -> Element + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }
}

impl<T: Record> Column<T> {
    /// The value this column reads from `row`.
    pub fn value(&self, row: &T) -> Value {
        row.field(&self.field)
    }

    /// Cell content for `row` at display position `index`.
    pub fn render_cell(&self, row: &T, index: usize) -> Element {
        let value = self.value(row);
        match &self.renderer {
            Some(renderer) => renderer(&value, row, index),
            None => Element::text(value.to_string())
                .width(Size::Fill)
                .text_align(self.align.into())
                .text_wrap(TextWrap::Truncate),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            field: self.field.clone(),
            sortable: self.sortable,
            renderer: self.renderer.clone(),
            align: self.align,
            width: self.width,
            class: self.class.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("field", &self.field)
            .field("sortable", &self.sortable)
            .field("renderer", &self.renderer.is_some())
            .field("align", &self.align)
            .field("width", &self.width)
            .field("class", &self.class)
            .finish()
    }
}
