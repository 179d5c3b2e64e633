//! Sortable, selectable data table.
//!
//! A [`DataTable`] holds only interaction state: its id, the internal sort
//! and the hovered row. Everything it shows is derived from
//! [`DataTableProps`] on each pass:
//!
//! ```
//! use tabula::prelude::*;
//! use tabula::tabula_dom::render_to_string;
//!
//! let rows = vec![
//!     row! { "id" => 1, "name" => "Bob" },
//!     row! { "id" => 2, "name" => "Ann" },
//! ];
//! let columns = vec![Column::new("name", "Name", "name").sortable()];
//!
//! let props = DataTableProps::new(&rows, &columns).sort_by("name");
//! let table = DataTable::from_props(&props);
//! let text = render_to_string(&table.view(&props), 20, 6);
//! assert!(text.find("Ann") < text.find("Bob"));
//! ```

mod column;
mod events;
mod props;
mod selection;
mod sort;
mod state;
mod view;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use column::{Alignment, CellRenderer, Column, ColumnWidth};
pub use props::{DataTableProps, RowClickHandler, RowSelectHandler, SortHandler, TableSize};
pub use selection::{MultiSelect, SelectionMode, SelectionReconciler};
pub use sort::{SortDirection, SortState, SortTracker, compare_values, sort_rows};
pub use state::{RenderState, choose_state};
pub use view::{EMPTY_BODY, EMPTY_HEADING, ERROR_HEADING, SKELETON_ROWS};

use crate::record::Record;

static NEXT_TABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Table identity, the prefix of every element id the table emits.
///
/// - `{id}:header:{column}` sortable header cell
/// - `{id}:select:{index}` selection control
/// - `{id}:row:{index}` body row
/// - `{id}:cell:{index}:{column}` body cell (not clickable)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableId(String);

impl TableId {
    /// A fresh id unique within the process.
    pub fn generate() -> Self {
        let n = NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("__table_{n}"))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn part(&self, suffix: &str) -> String {
        format!("{}:{suffix}", self.0)
    }

    pub fn header(&self, key: &str) -> String {
        self.part(&format!("header:{key}"))
    }

    pub fn select(&self, index: usize) -> String {
        self.part(&format!("select:{index}"))
    }

    pub fn row(&self, index: usize) -> String {
        self.part(&format!("row:{index}"))
    }

    pub fn cell(&self, index: usize, key: &str) -> String {
        self.part(&format!("cell:{index}:{key}"))
    }

    pub(crate) fn parse<'s>(&self, id: &'s str) -> Option<Target<'s>> {
        let rest = id.strip_prefix(self.0.as_str())?.strip_prefix(':')?;
        let (kind, arg) = rest.split_once(':')?;
        match kind {
            "header" => Some(Target::Header(arg)),
            "select" => arg.parse().ok().map(Target::Select),
            "row" => arg.parse().ok().map(Target::Row),
            _ => None,
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interactive element a table id points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target<'s> {
    Header(&'s str),
    Select(usize),
    Row(usize),
}

/// DataTable component state.
#[derive(Debug, Clone)]
pub struct DataTable {
    id: TableId,
    sort: SortTracker,
    hovered: Option<usize>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::with_id(TableId::generate())
    }

    pub fn with_id(id: TableId) -> Self {
        Self {
            id,
            sort: SortTracker::default(),
            hovered: None,
        }
    }

    /// A table whose internal sort starts from the props' `sort_by` and
    /// `sort_order`.
    pub fn from_props<T>(props: &DataTableProps<'_, T>) -> Self {
        Self::from_props_with_id(TableId::generate(), props)
    }

    /// Like [`DataTable::from_props`], keeping a caller-chosen id.
    pub fn from_props_with_id<T>(id: TableId, props: &DataTableProps<'_, T>) -> Self {
        Self {
            sort: SortTracker::new(props.initial_sort()),
            ..Self::with_id(id)
        }
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    /// The internal sort, advanced by header clicks even when the sort is
    /// controlled.
    pub fn internal_sort(&self) -> &SortState {
        self.sort.internal()
    }

    /// The sort the table displays.
    pub fn sort_state<T>(&self, props: &DataTableProps<'_, T>) -> SortState {
        self.sort.effective(props.sort_by, props.sort_order)
    }

    pub fn hovered_row(&self) -> Option<usize> {
        self.hovered
    }

    pub fn render_state<'a, T: Record>(&self, props: &DataTableProps<'a, T>) -> RenderState<'a, T> {
        choose_state(props, &self.sort_state(props))
    }
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new()
    }
}
