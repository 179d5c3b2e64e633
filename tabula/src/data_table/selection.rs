//! Selection state management for the table.
//!
//! The table never owns the selection. It reads the caller's current
//! selected rows, marks matching rows, and on a toggle hands back the list
//! the caller should store next.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Selection mode for the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection controls are rendered.
    #[default]
    None,
    /// Selecting a row replaces the previous selection.
    Single,
    /// Multiple rows may be selected; see [`MultiSelect`].
    Multiple,
}

impl SelectionMode {
    pub fn is_enabled(self) -> bool {
        self != SelectionMode::None
    }
}

impl From<bool> for SelectionMode {
    fn from(selectable: bool) -> Self {
        if selectable {
            SelectionMode::Single
        } else {
            SelectionMode::None
        }
    }
}

/// How a toggle in [`SelectionMode::Multiple`] builds the emitted list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiSelect {
    /// Same replace/clear rule as single mode: `[row]` or `[]`. Callers that
    /// want a growing set merge the emitted list into their own.
    #[default]
    Replace,
    /// Emit the current selection with `row` added or removed.
    Accumulate,
}

/// Matches rows against the caller's selection and computes toggles.
#[derive(Debug, Clone)]
pub struct SelectionReconciler<'a, T> {
    mode: SelectionMode,
    multi: MultiSelect,
    key_field: Option<&'a str>,
    selected: &'a [T],
}

impl<'a, T: Record + PartialEq + Clone> SelectionReconciler<'a, T> {
    pub fn new(mode: SelectionMode, key_field: Option<&'a str>, selected: &'a [T]) -> Self {
        Self {
            mode,
            multi: MultiSelect::Replace,
            key_field,
            selected,
        }
    }

    pub fn with_multi(mut self, multi: MultiSelect) -> Self {
        self.multi = multi;
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether `a` and `b` are the same row.
    ///
    /// Compares the key field when one is set. Rows missing the key field on
    /// both sides fall back to structural equality.
    pub fn same_row(&self, a: &T, b: &T) -> bool {
        if let Some(field) = self.key_field {
            let (ka, kb) = (a.field(field), b.field(field));
            if !(ka.is_null() && kb.is_null()) {
                return ka == kb;
            }
        }
        a == b
    }

    pub fn is_selected(&self, row: &T) -> bool {
        self.selected.iter().any(|s| self.same_row(s, row))
    }

    /// The selection to report after the user toggles `row`.
    ///
    /// Returns `None` when selection is disabled.
    pub fn toggle(&self, row: &T) -> Option<Vec<T>> {
        let selected = self.is_selected(row);
        let next = match (self.mode, self.multi) {
            (SelectionMode::None, _) => return None,
            (SelectionMode::Multiple, MultiSelect::Accumulate) => {
                if selected {
                    self.selected
                        .iter()
                        .filter(|s| !self.same_row(s, row))
                        .cloned()
                        .collect()
                } else {
                    let mut next = self.selected.to_vec();
                    next.push(row.clone());
                    next
                }
            }
            _ => {
                if selected {
                    Vec::new()
                } else {
                    vec![row.clone()]
                }
            }
        };
        log::debug!("selection toggled, {} row(s) selected", next.len());
        Some(next)
    }
}

/// Selection control glyph.
pub(crate) fn indicator(selected: bool) -> &'static str {
    if selected { "■" } else { "□" }
}
