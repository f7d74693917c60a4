// Module declarations
pub mod error;
pub mod data_type;
pub mod value;
pub mod decimal;
pub mod column;
pub mod schema;
pub mod row;
pub mod table;

// Re-exports for convenience
pub use error::{BindError, ExecutorError, TableError};
pub use data_type::ColumnType;
pub use value::Value;
pub use column::Column;
pub use row::Row;
pub use table::GenericTable;

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn typetest_values() -> Vec<Value> {
        vec![
            Value::Int32(2),
            Value::Int8(3),
            Value::Int16(4),
            Value::Int32(5),
            Value::Int64(6),
            Value::Float64(7.7),
            Value::Decimal(BigDecimal::from_str("8.000008").unwrap()),
            Value::Text("nine".to_string()),
            Value::Bytes(vec![10]),
            Value::Timestamp(1_027_555_200_000),
        ]
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int8(-3).to_string(), "-3");
        assert_eq!(Value::Float64(5.1).to_string(), "5.1");
        assert_eq!(Value::Text("seven".to_string()).to_string(), "seven");
        assert_eq!(Value::Bytes(vec![8, 8, 8, 8]).to_string(), "\\x08080808");
        assert_eq!(Value::Timestamp(42).to_string(), "42");
    }

    #[test]
    fn test_value_sql_literal() {
        assert_eq!(Value::Text("O'Brien".to_string()).to_sql_literal(), "'O''Brien'");
        assert_eq!(Value::Bytes(vec![0x0a, 0xff]).to_sql_literal(), "X'0AFF'");
        assert_eq!(Value::Int64(4).to_sql_literal(), "4");
    }

    #[test]
    fn test_timestamp_display_string() {
        assert_eq!(
            Value::Timestamp(0).to_display_string(),
            "1970-01-01 00:00:00.000"
        );
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int32(42).as_i32(), Some(42));
        assert_eq!(Value::Int16(42).as_i32(), None);
        assert_eq!(Value::Text("hello".to_string()).as_text(), Some("hello"));
        assert_eq!(Value::Bytes(vec![1]).as_bytes(), Some(&[1u8][..]));
        assert_eq!(Value::Timestamp(9).as_timestamp(), Some(9));
        assert!(Value::Int8(1).as_decimal().is_none());
    }

    #[test]
    fn test_value_column_type() {
        let types: Vec<ColumnType> = typetest_values().iter().map(Value::column_type).collect();
        let expected: Vec<ColumnType> = schema::COLUMNS.iter().map(|(_, t)| *t).collect();
        assert_eq!(types, expected);
    }

    #[test]
    fn test_column_type_from_name() {
        assert_eq!(ColumnType::from_name("integer"), Ok(ColumnType::Int32));
        assert_eq!(ColumnType::from_name("TINYINT"), Ok(ColumnType::Int8));
        assert_eq!(ColumnType::from_name("short"), Ok(ColumnType::Int16));
        assert_eq!(ColumnType::from_name("long"), Ok(ColumnType::Int64));
        assert_eq!(ColumnType::from_name("double"), Ok(ColumnType::Float64));
        assert_eq!(ColumnType::from_name("string"), Ok(ColumnType::Text));
        assert_eq!(ColumnType::from_name("date"), Ok(ColumnType::Timestamp));
        assert_eq!("varbinary".parse::<ColumnType>(), Ok(ColumnType::Bytes));
        assert!(matches!(
            ColumnType::from_name("geography"),
            Err(TableError::UnknownType(_))
        ));
    }

    #[test]
    fn test_schema_lookup() {
        assert_eq!(schema::COLUMN_COUNT, 10);
        assert_eq!(schema::COLUMNS[schema::PARTITION_COLUMN], ("TEST_ID", ColumnType::Int32));
        assert_eq!(schema::COLUMNS[6].1, ColumnType::Decimal);
        assert_eq!(schema::COLUMNS[schema::VARBINARY_COLUMN].0, "TEST_VARBINARY");
    }

    #[test]
    fn test_row_wrong_column_count() {
        let mut values = typetest_values();
        values.pop();
        assert!(matches!(
            Row::new(values),
            Err(BindError::ColumnCountMismatch { expected: 10, actual: 9 })
        ));
    }

    #[test]
    fn test_row_validate() {
        let row = Row::new(typetest_values()).unwrap();
        assert!(row.validate().is_ok());

        let mut values = typetest_values();
        values[2] = Value::Int32(4);
        let row = Row::new(values).unwrap();
        assert_eq!(
            row.validate(),
            Err(BindError::SchemaMismatch {
                index: 2,
                expected: ColumnType::Int16,
                actual: ColumnType::Int32,
            })
        );
    }

    #[test]
    fn test_table_add_column() {
        let mut table = GenericTable::new(Vec::new());
        table.add_column("test_id", "integer").unwrap();
        table.add_column("test_tiny", "tinyint").unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.columns()[0].name, "TEST_ID");
        assert_eq!(table.columns()[1].column_type, ColumnType::Int8);
        assert!(matches!(
            table.add_column("bad", "nope"),
            Err(TableError::UnknownType(_))
        ));
    }

    #[test]
    fn test_table_schema_locked_after_rows() {
        let mut table = GenericTable::new(Vec::new());
        table.add_column("a", "integer").unwrap();
        table.add_row(vec![Value::Int32(1)]).unwrap();
        assert_eq!(table.add_column("b", "integer"), Err(TableError::SchemaLocked));
    }

    #[test]
    fn test_table_row_arity() {
        let mut table = GenericTable::typetest();
        assert_eq!(
            table.add_row(vec![Value::Int32(1)]),
            Err(TableError::RowArity { expected: 10, actual: 1 })
        );
        assert!(table.add_row(typetest_values()).is_ok());
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_table_cursor() {
        let mut table = GenericTable::typetest();
        table.add_row(typetest_values()).unwrap();
        table.add_row(typetest_values()).unwrap();

        assert_eq!(table.active_row_index(), None);
        assert_eq!(table.get(0, ColumnType::Int32), Err(TableError::NoCurrentRow));

        assert!(table.advance_row());
        assert_eq!(table.active_row_index(), Some(0));
        assert!(table.advance_row());
        assert_eq!(table.active_row_index(), Some(1));
        assert!(!table.advance_row());
        assert!(!table.advance_row());
        assert_eq!(table.active_row_index(), None);

        table.reset_row_position();
        assert!(table.advance_row());
        assert_eq!(table.active_row_index(), Some(0));
    }

    #[test]
    fn test_table_get_asserts_type() {
        let mut table = GenericTable::typetest();
        table.add_row(typetest_values()).unwrap();
        table.advance_row();

        assert_eq!(table.get(7, ColumnType::Text).unwrap().as_text(), Some("nine"));
        assert_eq!(
            table.get(7, ColumnType::Bytes),
            Err(TableError::TypeMismatch {
                index: 7,
                expected: ColumnType::Bytes,
                actual: ColumnType::Text,
            })
        );
        assert_eq!(
            table.get(12, ColumnType::Int32),
            Err(TableError::ColumnOutOfRange { index: 12, count: 10 })
        );
    }

    #[test]
    fn test_table_json_round_trip() {
        let mut table = GenericTable::typetest();
        table.add_row(typetest_values()).unwrap();

        let json = serde_json::to_string(&table).unwrap();
        let restored: GenericTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_table_json_rejects_short_row() {
        let json = r#"{"columns":[{"name":"A","column_type":"Int32"}],"rows":[[]]}"#;
        assert!(serde_json::from_str::<GenericTable>(json).is_err());
    }

    #[test]
    fn test_bind_error_from_table_error() {
        assert_eq!(BindError::from(TableError::NoCurrentRow), BindError::EmptyTable);
        assert_eq!(
            BindError::from(TableError::TypeMismatch {
                index: 3,
                expected: ColumnType::Int32,
                actual: ColumnType::Text,
            }),
            BindError::ColumnTypeMismatch(3, ColumnType::Int32, ColumnType::Text)
        );
        assert_eq!(
            BindError::from(TableError::SchemaLocked),
            BindError::Table(TableError::SchemaLocked)
        );
    }
}
