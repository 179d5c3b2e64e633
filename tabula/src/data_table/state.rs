//! Render state selection.

use super::column::Column;
use super::props::DataTableProps;
use super::sort::{SortState, sort_rows};
use crate::record::Record;

/// What the table shows on this pass. Derived from props every time.
#[derive(Debug)]
pub enum RenderState<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    /// Rows in display order.
    Populated(Vec<&'a T>),
}

impl<T> PartialEq for RenderState<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RenderState::Loading, RenderState::Loading) => true,
            (RenderState::Error(a), RenderState::Error(b)) => a == b,
            (RenderState::Empty, RenderState::Empty) => true,
            (RenderState::Populated(a), RenderState::Populated(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| std::ptr::eq(*x, *y))
            }
            _ => false,
        }
    }
}

impl<T> RenderState<'_, T> {
    pub fn name(&self) -> &'static str {
        match self {
            RenderState::Loading => "loading",
            RenderState::Error(_) => "error",
            RenderState::Empty => "empty",
            RenderState::Populated(_) => "populated",
        }
    }
}

/// Pick the render state: loading, then error, then empty, then populated.
pub fn choose_state<'a, T: Record>(props: &DataTableProps<'a, T>, sort: &SortState) -> RenderState<'a, T> {
    if props.loading {
        return RenderState::Loading;
    }
    if let Some(message) = props.error_message() {
        return RenderState::Error(message);
    }
    if props.data.is_empty() {
        return RenderState::Empty;
    }
    let columns: &'a [Column<T>] = props.columns;
    RenderState::Populated(sort_rows(props.data, columns, sort))
}
