use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use model::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    records::row::RowData,
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use tokio_postgres::Row as PgRow;
use tracing::warn;
use uuid::Uuid;

/// Decodes a driver row into the pipeline's `RowData` representation.
///
/// Columns with a type outside the known set fall back to a string read;
/// values that fail to decode (including SQL NULLs) come through as `None`.
pub fn to_row_data(row: &PgRow) -> RowData {
    let field_values = row
        .columns()
        .iter()
        .map(|column| {
            let type_name = column.type_().name();
            let data_type = DataType::try_from(type_name).unwrap_or_else(|err| {
                warn!(%err, column = column.name(), "falling back to text decoding");
                DataType::Text
            });

            FieldValue {
                name: column.name().to_string(),
                value: decode_value(row, &data_type, column.name()),
                data_type,
            }
        })
        .collect();

    RowData::new(field_values)
}

fn decode_value(row: &PgRow, data_type: &DataType, name: &str) -> Option<Value> {
    match data_type {
        DataType::SmallInt => row.try_get::<_, i16>(name).ok().map(|v| Value::Int(v as i64)),
        DataType::Int => row.try_get::<_, i32>(name).ok().map(|v| Value::Int(v as i64)),
        DataType::BigInt => row.try_get::<_, i64>(name).ok().map(Value::Int),
        DataType::Float => row.try_get::<_, f32>(name).ok().map(|v| Value::Float(v as f64)),
        DataType::Double => row.try_get::<_, f64>(name).ok().map(Value::Float),
        DataType::Numeric => row
            .try_get::<_, Decimal>(name)
            .ok()
            .and_then(|v| v.to_f64().map(Value::Float)),
        DataType::VarChar | DataType::Char | DataType::Text => {
            row.try_get::<_, String>(name).ok().map(Value::String)
        }
        DataType::Boolean => row.try_get::<_, bool>(name).ok().map(Value::Boolean),
        DataType::Json => row.try_get::<_, serde_json::Value>(name).ok().map(Value::Json),
        DataType::Uuid => row.try_get::<_, Uuid>(name).ok().map(Value::Uuid),
        DataType::Date => row.try_get::<_, NaiveDate>(name).ok().map(Value::Date),
        DataType::Timestamp => row
            .try_get::<_, NaiveDateTime>(name)
            .ok()
            .map(|v| Value::Timestamp(v.and_utc())),
        DataType::TimestampTz => row
            .try_get::<_, DateTime<Utc>>(name)
            .ok()
            .map(Value::Timestamp),
        DataType::Bytea => row.try_get::<_, Vec<u8>>(name).ok().map(Value::Bytes),
    }
}
