use bigdecimal::BigDecimal;
use crate::core::{BindError, Row, Value, decimal};
use crate::executor::{INSERT_TYPETEST, StatementExecutor};

/// Returned by every successful insert
pub const SUCCESS: i64 = 0;

/// Binds a full typetest row to the insert statement and runs it once.
///
/// The binder holds a handle to the executor rather than owning storage: it
/// validates and normalizes values, then delegates the single execution.
pub struct RowBinder<'a, E: StatementExecutor + ?Sized> {
    executor: &'a mut E,
}

impl<'a, E: StatementExecutor + ?Sized> RowBinder<'a, E> {
    pub const fn new(executor: &'a mut E) -> Self {
        Self { executor }
    }

    /// Insert one row given as explicit column values, in table order
    #[allow(clippy::similar_names)]
    pub fn bind_and_insert(
        &mut self,
        id: i32,
        tiny: i8,
        small: i16,
        integer: i32,
        big: i64,
        dbl: f64,
        decimal: BigDecimal,
        text: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        timestamp: i64,
    ) -> Result<i64, BindError> {
        let row = Row::new(vec![
            Value::Int32(id),
            Value::Int8(tiny),
            Value::Int16(small),
            Value::Int32(integer),
            Value::Int64(big),
            Value::Float64(dbl),
            Value::Decimal(decimal),
            Value::Text(text.into()),
            Value::Bytes(bytes.into()),
            Value::Timestamp(timestamp),
        ])?;
        self.insert_row(row)
    }

    /// Validate `row`, normalize it and execute the insert
    pub fn insert_row(&mut self, row: Row) -> Result<i64, BindError> {
        row.validate()?;
        let params = Self::bind(row);

        tracing::debug!(statement = INSERT_TYPETEST.name, id = %params[0], "executing insert");
        self.executor.execute(&INSERT_TYPETEST, params).map_err(|e| {
            tracing::warn!(statement = INSERT_TYPETEST.name, error = %e, "insert failed");
            BindError::from(e)
        })?;

        Ok(SUCCESS)
    }

    /// Parameter list in schema order. Decimals are reduced to the decimal context.
    fn bind(row: Row) -> Vec<Value> {
        row.into_values()
            .into_iter()
            .map(|value| match value {
                Value::Decimal(d) => Value::Decimal(decimal::round_to_context(&d)),
                other => other,
            })
            .collect()
    }
}
