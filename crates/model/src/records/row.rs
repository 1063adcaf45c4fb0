use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// One result row: an ordered list of named column values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        RowData { field_values }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }

    /// Renders the row as `(col: value, col: value)`.
    pub fn render(&self) -> String {
        let fields: Vec<String> = self.field_values.iter().map(|f| f.to_string()).collect();
        format!("({})", fields.join(", "))
    }
}

/// Renders a row set as a bracketed list; the empty set renders as `[]`.
pub fn render_rows(rows: &[RowData]) -> String {
    let rendered: Vec<String> = rows.iter().map(|row| row.render()).collect();
    format!("[{}]", rendered.join(", "))
}
