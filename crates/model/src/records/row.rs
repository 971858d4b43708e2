use crate::core::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One denormalized SQL result row: prefixed column name to scalar value.
///
/// Rows are ephemeral; the decomposition engine reads them once and never
/// stores them. Column order is the order the engine returned them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatRow {
    values: IndexMap<String, Value>,
}

impl FlatRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent constructor, mainly for tests and adapters.
    pub fn with(mut self, column: &str, value: Value) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: Value) {
        self.values.insert(column.to_string(), value);
    }

    /// Returns `None` when the column is absent from the row, which is a
    /// different condition from the column holding `Value::Null`.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for FlatRow {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        FlatRow {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_are_distinct() {
        let row = FlatRow::new().with("c_id", Value::Null);
        assert_eq!(row.get("c_id"), Some(&Value::Null));
        assert_eq!(row.get("c_name"), None);
    }

    #[test]
    fn columns_keep_insertion_order() {
        let row = FlatRow::new()
            .with("b", Value::Int(1))
            .with("a", Value::Int(2));
        let cols: Vec<_> = row.columns().collect();
        assert_eq!(cols, vec!["b", "a"]);
    }
}
