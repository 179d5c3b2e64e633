//! Sort state and the display-order sort.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::column::Column;
use crate::record::Record;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header glyph for an active sort in this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    /// `aria-sort` style name.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Column key and direction. `column: None` means unsorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: Some(column.into()),
            direction,
        }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Direction if this state sorts by `key`.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.column.as_deref() == Some(key)).then_some(self.direction)
    }
}

/// Compare two field values for display order.
///
/// Nulls always go last, whatever the direction.
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.natural_cmp(b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Display order of `rows` under `state`.
///
/// Returns the rows in input order when `state` has no column, or names a
/// column that is unknown or not sortable. The sort is stable and never
/// touches `rows`.
pub fn sort_rows<'a, T: Record>(rows: &'a [T], columns: &[Column<T>], state: &SortState) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = rows.iter().collect();

    let Some(key) = state.column.as_deref() else {
        return sorted;
    };
    let Some(column) = columns.iter().find(|c| c.key == key && c.sortable) else {
        return sorted;
    };

    // Read each field once rather than on every comparison
    let mut keyed: Vec<(Value, &T)> = sorted.drain(..).map(|row| (column.value(row), row)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, state.direction));
    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Internal (uncontrolled) sort state plus the header toggle rule.
#[derive(Debug, Clone, Default)]
pub struct SortTracker {
    internal: SortState,
}

impl SortTracker {
    pub fn new(initial: SortState) -> Self {
        Self { internal: initial }
    }

    pub fn internal(&self) -> &SortState {
        &self.internal
    }

    /// The sort to display.
    ///
    /// A controlled `sort_by` wins; its direction defaults to ascending.
    pub fn effective(&self, sort_by: Option<&str>, sort_order: Option<SortDirection>) -> SortState {
        match sort_by {
            Some(column) => SortState::new(column, sort_order.unwrap_or_default()),
            None => self.internal.clone(),
        }
    }

    /// Apply a click on the header of `key`.
    ///
    /// The same column clicked while ascending flips to descending; anything
    /// else starts ascending on `key`. Returns `None` and leaves the state
    /// alone when `key` is unknown or not sortable.
    pub fn toggle<T>(&mut self, columns: &[Column<T>], key: &str) -> Option<SortState> {
        if !columns.iter().any(|c| c.key == key && c.sortable) {
            return None;
        }

        let direction = match self.internal.direction_for(key) {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.internal = SortState::new(key, direction);
        log::debug!("sort changed to {key} {}", direction.as_str());
        Some(self.internal.clone())
    }
}
