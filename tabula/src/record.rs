//! Row records: anything that can hand out a [`Value`] by field name.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::value::Value;

/// A row displayed by a [`DataTable`](crate::data_table::DataTable).
///
/// The table never inspects a record except through this trait. A missing
/// field reads as [`Value::Null`].
pub trait Record {
    fn field(&self, name: &str) -> Value;
}

/// Ordered map row, built with [`row!`](crate::row).
pub type Row = BTreeMap<String, Value>;

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).map(Value::from).unwrap_or_default()
    }
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Value {
        self.get(name).map(Value::from).unwrap_or_default()
    }
}

/// Build a [`Row`] from `field => value` pairs.
///
/// ```
/// use tabula::prelude::*;
///
/// let user = row! { "id" => 1, "name" => "Ann", "email" => Value::Null };
/// assert_eq!(user.field("name"), Value::from("Ann"));
/// assert!(user.field("age").is_null());
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::record::Row::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut row = $crate::record::Row::new();
        $(
            row.insert(::std::string::String::from($key), $crate::value::Value::from($value));
        )+
        row
    }};
}
