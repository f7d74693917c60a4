use serde::{Deserialize, Serialize};
use super::error::TableError;

/// Scalar kinds a column (and a bound parameter) can hold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ColumnType {
    // Fixed-width integers
    Int8,
    Int16,
    Int32,
    Int64,
    // Floating point
    Float64,
    // Arbitrary precision, rounded to the decimal context on bind
    Decimal,
    // Variable length
    Text,
    Bytes,
    // Milliseconds since the Unix epoch
    Timestamp,
}

impl ColumnType {
    #[must_use]
    pub const fn sql_name(self) -> &'static str {
        match self {
            Self::Int8 => "TINYINT",
            Self::Int16 => "SMALLINT",
            Self::Int32 => "INTEGER",
            Self::Int64 => "BIGINT",
            Self::Float64 => "FLOAT",
            Self::Decimal => "DECIMAL",
            Self::Text => "VARCHAR",
            Self::Bytes => "VARBINARY",
            Self::Timestamp => "TIMESTAMP",
        }
    }

    /// Parse a column type name, case-insensitive.
    ///
    /// Accepts the SQL names plus the short aliases tables have historically
    /// been declared with (`byte`, `short`, `int`, `long`, `double`, `string`, `date`).
    pub fn from_name(name: &str) -> Result<Self, TableError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tinyint" | "byte" => Ok(Self::Int8),
            "smallint" | "short" => Ok(Self::Int16),
            "integer" | "int" => Ok(Self::Int32),
            "bigint" | "long" => Ok(Self::Int64),
            "float" | "double" => Ok(Self::Float64),
            "decimal" => Ok(Self::Decimal),
            "varchar" | "string" => Ok(Self::Text),
            "varbinary" => Ok(Self::Bytes),
            "timestamp" | "date" => Ok(Self::Timestamp),
            _ => Err(TableError::UnknownType(name.to_string())),
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sql_name())
    }
}

impl std::str::FromStr for ColumnType {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
