//! Presentational components for terminal applications.
//!
//! - [`DataTable`](data_table::DataTable): sortable, selectable table with
//!   loading, error and empty states.
//! - [`InputField`](input_field::InputField): text/password input with label,
//!   helper text, clear button and visibility toggle.
//!
//! Components are rebuilt from their props on every pass and return a
//! [`tabula_dom::Element`] tree. Interaction comes back in through the
//! component's `on_click` / `on_key` methods with the id of the element that
//! was hit.

pub mod config;
pub mod data_table;
pub mod events;
pub mod input_field;
pub mod record;
pub mod value;

pub use tabula_dom;

pub mod prelude {
    pub use crate::config::{InputOptions, TableOptions};
    pub use crate::data_table::{
        Alignment, CellRenderer, Column, ColumnWidth, DataTable, DataTableProps, MultiSelect,
        RenderState, SelectionMode, SelectionReconciler, SortDirection, SortState, SortTracker,
        TableId, TableSize, choose_state, sort_rows,
    };
    pub use crate::events::EventResult;
    pub use crate::input_field::{
        InputField, InputFieldProps, InputId, InputKind, InputSize, InputVariant,
    };
    pub use crate::record::{Record, Row};
    pub use crate::row;
    pub use crate::value::Value;
}
