//! Event handling for the DataTable component.

use tabula_dom::{Key, find_element};

use super::props::DataTableProps;
use super::selection::SelectionReconciler;
use super::state::RenderState;
use super::{DataTable, Target};
use crate::events::EventResult;
use crate::record::Record;

impl DataTable {
    /// Handle a click on the element with id `target`.
    ///
    /// `target` is the deepest clickable element under the pointer, so a
    /// click on a selection control never reaches its row.
    pub fn on_click<T: Record + PartialEq + Clone>(
        &mut self,
        props: &mut DataTableProps<'_, T>,
        target: &str,
    ) -> EventResult {
        match self.id().parse(target) {
            Some(Target::Header(key)) => self.on_header_click(props, key),
            Some(Target::Select(index)) => self.on_select_click(props, index),
            Some(Target::Row(index)) => self.on_row_click(props, index),
            None => match self.row_containing(props, target) {
                Some(index) => self.on_row_click(props, index),
                None => EventResult::Ignored,
            },
        }
    }

    /// Handle a key press while `target` has focus.
    ///
    /// Enter and Space on a sortable header or a selection control act as a
    /// click.
    pub fn on_key<T: Record + PartialEq + Clone>(
        &mut self,
        props: &mut DataTableProps<'_, T>,
        target: &str,
        key: Key,
    ) -> EventResult {
        if !matches!(key, Key::Enter | Key::Char(' ')) {
            return EventResult::Ignored;
        }
        match self.id().parse(target) {
            Some(Target::Header(_) | Target::Select(_)) => self.on_click(props, target),
            _ => EventResult::Ignored,
        }
    }

    /// Track the row under the pointer for hover styling.
    ///
    /// Returns true when the hovered row changed.
    pub fn on_mouse_move(&mut self, target: Option<&str>) -> bool {
        let hovered = match target.and_then(|id| self.id().parse(id)) {
            Some(Target::Row(index) | Target::Select(index)) => Some(index),
            _ => None,
        };
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Display index of the row whose custom-rendered cell owns `target`.
    ///
    /// A renderer may return clickable elements with ids of its own; clicks
    /// on them still belong to the row.
    fn row_containing<T: Record>(&self, props: &DataTableProps<'_, T>, target: &str) -> Option<usize> {
        let rendered: Vec<_> = props.columns.iter().filter(|c| c.renderer.is_some()).collect();
        if rendered.is_empty() {
            return None;
        }
        let RenderState::Populated(rows) = self.render_state(props) else {
            return None;
        };
        rows.iter().enumerate().find_map(|(index, row)| {
            rendered
                .iter()
                .any(|column| find_element(&column.render_cell(row, index), target).is_some())
                .then_some(index)
        })
    }

    fn on_header_click<T>(&mut self, props: &mut DataTableProps<'_, T>, key: &str) -> EventResult {
        let Some(next) = self.sort.toggle(props.columns, key) else {
            return EventResult::Ignored;
        };
        if let Some(on_sort) = props.on_sort.as_mut() {
            on_sort(key, next.direction);
        }
        EventResult::Consumed
    }

    fn on_select_click<T: Record + PartialEq + Clone>(
        &mut self,
        props: &mut DataTableProps<'_, T>,
        index: usize,
    ) -> EventResult {
        let RenderState::Populated(rows) = self.render_state(props) else {
            return EventResult::Ignored;
        };
        let Some(row) = rows.get(index) else {
            return EventResult::Ignored;
        };

        let reconciler = SelectionReconciler::new(props.selectable, props.key_field, props.selected_rows)
            .with_multi(props.multi_select);
        let Some(next) = reconciler.toggle(row) else {
            return EventResult::Ignored;
        };
        if let Some(on_row_select) = props.on_row_select.as_mut() {
            on_row_select(next);
        }
        EventResult::Consumed
    }

    fn on_row_click<T: Record>(&mut self, props: &mut DataTableProps<'_, T>, index: usize) -> EventResult {
        let RenderState::Populated(rows) = self.render_state(props) else {
            return EventResult::Ignored;
        };
        let (Some(row), Some(on_row_click)) = (rows.get(index), props.on_row_click.as_mut()) else {
            return EventResult::Ignored;
        };
        on_row_click(row, index);
        EventResult::Consumed
    }
}
