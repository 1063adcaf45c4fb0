use crate::core::data_type::DataType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single decoded column value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Json(serde_json::Value),
    Uuid(Uuid),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Null,
}

/// Renders a JSON value in the same `(key: value)` / `[...]` shape as rows,
/// so structured columns stay free of brace notation.
fn fmt_json(value: &serde_json::Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        serde_json::Value::Object(map) => {
            write!(f, "(")?;
            for (idx, (key, val)) in map.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: ")?;
                fmt_json(val, f)?;
            }
            write!(f, ")")
        }
        serde_json::Value::Array(items) => {
            write!(f, "[")?;
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                fmt_json(item, f)?;
            }
            write!(f, "]")
        }
        serde_json::Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
        other => write!(f, "{other}"),
    }
}

impl fmt::Display for Value {
    /// Text form used when rows are rendered for prompts and terminal output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{}\"", v.replace('"', "\\\"")),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Json(v) => fmt_json(v, f),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Bytes(v) => write!(f, "bytea[{}]", v.len()),
            Value::Date(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Null => write!(f, "NULL"),
        }
    }
}

/// A named column value inside a result row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Option<Value>,
    pub data_type: DataType,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.name, value),
            None => write!(f, "{}: NULL", self.name),
        }
    }
}
