use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column types the query pipeline knows how to decode from PostgreSQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Numeric,
    VarChar,
    Char,
    Text,
    Boolean,
    Json,
    Uuid,
    Date,
    Timestamp,
    TimestampTz,
    Bytea,
}

#[derive(Debug, Error)]
#[error("Unknown column type: {0}")]
pub struct UnknownDataType(pub String);

impl TryFrom<&str> for DataType {
    type Error = UnknownDataType;

    /// Maps a PostgreSQL type name (as reported by the driver) to a `DataType`.
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.to_lowercase().as_str() {
            "int2" | "smallint" => Ok(DataType::SmallInt),
            "int4" | "int" | "integer" => Ok(DataType::Int),
            "int8" | "bigint" => Ok(DataType::BigInt),
            "float4" | "real" => Ok(DataType::Float),
            "float8" | "double precision" => Ok(DataType::Double),
            "numeric" | "decimal" => Ok(DataType::Numeric),
            "varchar" | "character varying" => Ok(DataType::VarChar),
            "bpchar" | "char" | "character" => Ok(DataType::Char),
            "text" | "name" => Ok(DataType::Text),
            "bool" | "boolean" => Ok(DataType::Boolean),
            "json" | "jsonb" => Ok(DataType::Json),
            "uuid" => Ok(DataType::Uuid),
            "date" => Ok(DataType::Date),
            "timestamp" | "timestamp without time zone" => Ok(DataType::Timestamp),
            "timestamptz" | "timestamp with time zone" => Ok(DataType::TimestampTz),
            "bytea" => Ok(DataType::Bytea),
            other => Err(UnknownDataType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_driver_type_names() {
        assert_eq!(DataType::try_from("int4").unwrap(), DataType::Int);
        assert_eq!(DataType::try_from("VARCHAR").unwrap(), DataType::VarChar);
        assert_eq!(DataType::try_from("timestamptz").unwrap(), DataType::TimestampTz);
        assert_eq!(DataType::try_from("numeric").unwrap(), DataType::Numeric);
    }

    #[test]
    fn rejects_unknown_type_names() {
        let err = DataType::try_from("circle").unwrap_err();
        assert_eq!(err.to_string(), "Unknown column type: circle");
    }
}
