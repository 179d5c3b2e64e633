//! Serializable presentation options.
//!
//! Applications that keep table or input settings in a config file
//! deserialize these and hand them to the props builders with
//! [`DataTableProps::options`](crate::data_table::DataTableProps::options)
//! and [`InputFieldProps::options`](crate::input_field::InputFieldProps::options).

use serde::{Deserialize, Serialize};

use crate::data_table::{MultiSelect, SelectionMode, TableSize};
use crate::input_field::{InputSize, InputVariant};

/// Table presentation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub size: TableSize,
    pub striped: bool,
    pub hoverable: bool,
    pub selectable: SelectionMode,
    pub multi_select: MultiSelect,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            size: TableSize::Md,
            striped: false,
            hoverable: true,
            selectable: SelectionMode::None,
            multi_select: MultiSelect::Replace,
        }
    }
}

/// Input presentation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub variant: InputVariant,
    pub size: InputSize,
    pub show_clear_button: bool,
    pub show_password_toggle: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            variant: InputVariant::Outlined,
            size: InputSize::Md,
            show_clear_button: false,
            show_password_toggle: false,
        }
    }
}
