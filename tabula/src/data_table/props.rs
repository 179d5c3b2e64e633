//! Table props and their builder.

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::selection::{MultiSelect, SelectionMode};
use super::sort::{SortDirection, SortState};
use crate::config::TableOptions;

/// Row and header height variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl TableSize {
    /// Height of header and body rows in terminal lines.
    pub fn row_height(self) -> u16 {
        match self {
            TableSize::Sm | TableSize::Md => 1,
            TableSize::Lg => 3,
        }
    }
}

pub type RowSelectHandler<'a, T> = Box<dyn FnMut(Vec<T>) + 'a>;
pub type SortHandler<'a> = Box<dyn FnMut(&str, SortDirection) + 'a>;
pub type RowClickHandler<'a, T> = Box<dyn FnMut(&T, usize) + 'a>;

/// Everything a [`DataTable`](super::DataTable) renders from.
///
/// Data, columns and the current selection are borrowed from the caller and
/// never modified.
pub struct DataTableProps<'a, T> {
    pub data: &'a [T],
    pub columns: &'a [Column<T>],
    pub key_field: Option<&'a str>,
    pub loading: bool,
    /// Non-empty message switches the table to its error panel.
    pub error: Option<&'a str>,
    pub selectable: SelectionMode,
    pub multi_select: MultiSelect,
    pub selected_rows: &'a [T],
    pub on_row_select: Option<RowSelectHandler<'a, T>>,
    /// Controlled sort column. When set, it is what the table displays.
    pub sort_by: Option<&'a str>,
    pub sort_order: Option<SortDirection>,
    pub on_sort: Option<SortHandler<'a>>,
    pub on_row_click: Option<RowClickHandler<'a, T>>,
    pub size: TableSize,
    pub striped: bool,
    pub hoverable: bool,
    pub class: Option<&'a str>,
}

impl<'a, T> DataTableProps<'a, T> {
    pub fn new(data: &'a [T], columns: &'a [Column<T>]) -> Self {
        Self {
            data,
            columns,
            key_field: None,
            loading: false,
            error: None,
            selectable: SelectionMode::None,
            multi_select: MultiSelect::Replace,
            selected_rows: &[],
            on_row_select: None,
            sort_by: None,
            sort_order: None,
            on_sort: None,
            on_row_click: None,
            size: TableSize::Md,
            striped: false,
            hoverable: true,
            class: None,
        }
    }

    /// Apply presentation defaults loaded from config.
    pub fn options(mut self, options: &TableOptions) -> Self {
        self.size = options.size;
        self.striped = options.striped;
        self.hoverable = options.hoverable;
        self.selectable = options.selectable;
        self.multi_select = options.multi_select;
        self
    }

    pub fn key_field(mut self, field: &'a str) -> Self {
        self.key_field = Some(field);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, message: &'a str) -> Self {
        self.error = Some(message);
        self
    }

    pub fn selectable(mut self, mode: impl Into<SelectionMode>) -> Self {
        self.selectable = mode.into();
        self
    }

    pub fn multi_select(mut self, multi: MultiSelect) -> Self {
        self.multi_select = multi;
        self
    }

    pub fn selected_rows(mut self, rows: &'a [T]) -> Self {
        self.selected_rows = rows;
        self
    }

    pub fn on_row_select(mut self, handler: impl FnMut(Vec<T>) + 'a) -> Self {
        self.on_row_select = Some(Box::new(handler));
        self
    }

    pub fn sort_by(mut self, column: &'a str) -> Self {
        self.sort_by = Some(column);
        self
    }

    pub fn sort_order(mut self, direction: SortDirection) -> Self {
        self.sort_order = Some(direction);
        self
    }

    pub fn on_sort(mut self, handler: impl FnMut(&str, SortDirection) + 'a) -> Self {
        self.on_sort = Some(Box::new(handler));
        self
    }

    pub fn on_row_click(mut self, handler: impl FnMut(&T, usize) + 'a) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    pub fn size(mut self, size: TableSize) -> Self {
        self.size = size;
        self
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Initial internal sort taken from `sort_by`/`sort_order`.
    pub(crate) fn initial_sort(&self) -> SortState {
        match self.sort_by {
            Some(column) => SortState::new(column, self.sort_order.unwrap_or_default()),
            None => SortState::unsorted(),
        }
    }

    /// The error message, if it is non-empty.
    pub(crate) fn error_message(&self) -> Option<&'a str> {
        self.error.filter(|message| !message.is_empty())
    }
}
