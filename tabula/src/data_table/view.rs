//! Element tree for each render state.

use std::collections::HashSet;

use tabula_dom::{Align, Border, Color, Edges, Element, Justify, Size, Style, TextAlign, TextWrap};

use super::column::Column;
use super::props::DataTableProps;
use super::selection::{self, SelectionReconciler};
use super::sort::SortState;
use super::state::RenderState;
use super::DataTable;
use crate::record::Record;

/// Placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 5;

/// Width of the selection control column.
const SELECT_WIDTH: u16 = 3;

pub const ERROR_HEADING: &str = "Error Loading Data";
pub const EMPTY_HEADING: &str = "No Data Available";
pub const EMPTY_BODY: &str = "There are no records to display.";

impl DataTable {
    /// Build the element tree for the current props.
    pub fn view<T: Record + PartialEq + Clone>(&self, props: &DataTableProps<'_, T>) -> Element {
        warn_duplicate_keys(props.columns);

        let sort = self.sort_state(props);
        let root = match self.render_state(props) {
            RenderState::Loading => self.loading_view(props),
            RenderState::Error(message) => self.error_view(message),
            RenderState::Empty => self.empty_view(),
            RenderState::Populated(rows) => self.table_view(props, &sort, &rows),
        };

        match props.class {
            Some(class) => root.data("class", class),
            None => root,
        }
    }

    fn frame(&self, border_color: &str) -> Element {
        Element::col()
            .id(self.id().to_string())
            .width(Size::Fill)
            .style(
                Style::new()
                    .border(Border::Rounded)
                    .border_color(Color::var(border_color)),
            )
    }

    fn loading_view<T>(&self, props: &DataTableProps<'_, T>) -> Element {
        let height = props.size.row_height();
        let cells = props.columns.len() + usize::from(props.selectable.is_enabled());

        let skeleton_row = |id: String, header: bool| {
            let bar = Style::fg(if header { "border" } else { "muted" });
            Element::row()
                .id(id)
                .width(Size::Fill)
                .height(Size::Fixed(height))
                .align(Align::Center)
                .style(if header {
                    Style::bg("surface")
                } else {
                    Style::new()
                })
                .children((0..cells).map(|_| {
                    Element::row()
                        .width(Size::Fill)
                        .padding(Edges::horizontal(1))
                        .child(Element::text("░".repeat(48)).width(Size::Fill).style(bar.clone()))
                }))
        };

        self.frame("border")
            .data("state", "loading")
            .data("aria-busy", "true")
            .child(skeleton_row(self.id().part("skeleton:header"), true))
            .children((0..SKELETON_ROWS).map(|i| skeleton_row(self.id().part(&format!("skeleton:{i}")), false)))
    }

    fn error_view(&self, message: &str) -> Element {
        let error = Style::fg("error");
        self.frame("error")
            .data("state", "error")
            .role("alert")
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .child(
                Element::text(ERROR_HEADING)
                    .width(Size::Fill)
                    .text_align(TextAlign::Center)
                    .style(error.clone().bold()),
            )
            .child(
                Element::text(message)
                    .width(Size::Fill)
                    .text_align(TextAlign::Center)
                    .text_wrap(TextWrap::WordWrap)
                    .style(error),
            )
    }

    fn empty_view(&self) -> Element {
        self.frame("border")
            .data("state", "empty")
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .child(
                Element::text(EMPTY_HEADING)
                    .width(Size::Fill)
                    .text_align(TextAlign::Center)
                    .style(Style::new().bold()),
            )
            .child(
                Element::text(EMPTY_BODY)
                    .width(Size::Fill)
                    .text_align(TextAlign::Center)
                    .style(Style::fg("muted")),
            )
    }

    fn table_view<T: Record + PartialEq + Clone>(
        &self,
        props: &DataTableProps<'_, T>,
        sort: &SortState,
        rows: &[&T],
    ) -> Element {
        let reconciler = SelectionReconciler::new(props.selectable, props.key_field, props.selected_rows)
            .with_multi(props.multi_select);

        self.frame("border")
            .data("state", "populated")
            .role("table")
            .child(self.header_row(props, sort))
            .children(
                rows.iter()
                    .enumerate()
                    .map(|(index, row)| self.body_row(props, &reconciler, row, index)),
            )
    }

    fn header_row<T>(&self, props: &DataTableProps<'_, T>, sort: &SortState) -> Element {
        let mut header = Element::row()
            .id(self.id().part("header"))
            .width(Size::Fill)
            .height(Size::Fixed(props.size.row_height()))
            .align(Align::Center)
            .style(Style::bg("surface"));

        if props.selectable.is_enabled() {
            header = header.child(Element::box_().width(Size::Fixed(SELECT_WIDTH)));
        }

        header.children(props.columns.iter().map(|column| self.header_cell(column, sort)))
    }

    fn header_cell<T>(&self, column: &Column<T>, sort: &SortState) -> Element {
        let active = sort.direction_for(&column.key);

        let mut cell = Element::row()
            .id(self.id().header(&column.key))
            .width(column.width.into())
            .height(Size::Fill)
            .padding(Edges::horizontal(1))
            .align(Align::Center)
            .role("columnheader")
            .child(
                Element::text(column.title.clone())
                    .width(Size::Fill)
                    .text_align(column.align.into())
                    .text_wrap(TextWrap::Truncate)
                    .style(Style::new().bold()),
            );

        if let Some(class) = &column.class {
            cell = cell.data("class", class.clone());
        }

        if !column.sortable {
            return cell;
        }

        let (glyph, color) = match active {
            Some(direction) => (direction.indicator(), "primary"),
            None => ("↕", "muted"),
        };
        cell.clickable(true)
            .focusable(true)
            .data("aria-sort", active.map_or("none", |d| d.as_str()))
            .child(
                Element::text(glyph)
                    .width(Size::Fixed(2))
                    .text_align(TextAlign::Right)
                    .style(Style::fg(color)),
            )
    }

    fn body_row<T: Record + PartialEq + Clone>(
        &self,
        props: &DataTableProps<'_, T>,
        reconciler: &SelectionReconciler<'_, T>,
        row: &T,
        index: usize,
    ) -> Element {
        let selected = props.selectable.is_enabled() && reconciler.is_selected(row);
        let hovered = props.hoverable && self.hovered_row() == Some(index);

        let background = if selected {
            Some("selection")
        } else if hovered {
            Some("hover")
        } else if props.striped && index % 2 == 1 {
            Some("surface")
        } else {
            None
        };
        let style = background.map_or_else(Style::new, Style::bg);

        let mut element = Element::row()
            .id(self.id().row(index))
            .width(Size::Fill)
            .height(Size::Fixed(props.size.row_height()))
            .clickable(true)
            .role("row")
            .style(style);

        if props.on_row_click.is_some() {
            element = element.data("cursor", "pointer");
        }

        if props.selectable.is_enabled() {
            element = element.data("aria-selected", selected.to_string()).child(
                Element::row()
                    .id(self.id().select(index))
                    .width(Size::Fixed(SELECT_WIDTH))
                    .height(Size::Fill)
                    .align(Align::Center)
                    .justify(Justify::Center)
                    .clickable(true)
                    .focusable(true)
                    .role("checkbox")
                    .data("aria-checked", selected.to_string())
                    .child(Element::text(selection::indicator(selected))),
            );
        }

        element.children(props.columns.iter().map(|column| {
            let mut cell = Element::row()
                .id(self.id().cell(index, &column.key))
                .width(column.width.into())
                .height(Size::Fill)
                .padding(Edges::horizontal(1))
                .align(Align::Center)
                .child(column.render_cell(row, index));
            if let Some(class) = &column.class {
                cell = cell.data("class", class.clone());
            }
            cell
        }))
    }
}

fn warn_duplicate_keys<T>(columns: &[Column<T>]) {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            log::warn!("duplicate column key {:?}; sort state is ambiguous", column.key);
        }
    }
}
