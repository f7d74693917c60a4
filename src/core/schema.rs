//! Fixed layout of the `typetest` table
//!
//! Column order here is the parameter order of every bound INSERT.

use super::data_type::ColumnType;

pub const TABLE_NAME: &str = "typetest";

pub const COLUMN_COUNT: usize = 10;

/// Index of the partitioning / primary key column
pub const PARTITION_COLUMN: usize = 0;

pub const VARCHAR_COLUMN: usize = 7;
pub const VARBINARY_COLUMN: usize = 8;

/// (name, type) for every column, in table order
pub const COLUMNS: [(&str, ColumnType); COLUMN_COUNT] = [
    ("TEST_ID", ColumnType::Int32),
    ("TEST_TINY", ColumnType::Int8),
    ("TEST_SMALL", ColumnType::Int16),
    ("TEST_INTEGER", ColumnType::Int32),
    ("TEST_BIG", ColumnType::Int64),
    ("TEST_FLOAT", ColumnType::Float64),
    ("TEST_DECIMAL", ColumnType::Decimal),
    ("TEST_VARCHAR", ColumnType::Text),
    ("TEST_VARBINARY", ColumnType::Bytes),
    ("TEST_TIMESTAMP", ColumnType::Timestamp),
];
