//! In-process statement executor
//!
//! Stands in for the storage engine: accepts the typetest insert, applies the
//! table's constraints (primary key on `test_id`, VARCHAR/VARBINARY limits)
//! and keeps the rows in memory ordered by `test_id`.

use std::collections::BTreeMap;
use crate::config::ExecutorConfig;
use crate::core::{ExecutorError, Value, schema};
use super::StatementExecutor;
use super::statement::{INSERT_TYPETEST, StatementTemplate};

#[derive(Debug, Default)]
pub struct MemoryExecutor {
    config: ExecutorConfig,
    rows: BTreeMap<i32, Vec<Value>>,
}

impl MemoryExecutor {
    #[must_use]
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            config,
            rows: BTreeMap::new(),
        }
    }

    /// Stored rows in `test_id` order
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.values().map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, id: i32) -> Option<&[Value]> {
        self.rows.get(&id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_types(params: &[Value]) -> Result<(), ExecutorError> {
        for (index, (value, (_, expected))) in params.iter().zip(schema::COLUMNS.iter()).enumerate() {
            let actual = value.column_type();
            if actual != *expected {
                return Err(ExecutorError::ParameterType {
                    index,
                    expected: *expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn check_lengths(&self, params: &[Value]) -> Result<(), ExecutorError> {
        if let Some(s) = params[schema::VARCHAR_COLUMN].as_text() {
            if s.len() > self.config.max_varchar_len {
                return Err(ExecutorError::ValueTooLong {
                    column: schema::COLUMNS[schema::VARCHAR_COLUMN].0,
                    len: s.len(),
                    max: self.config.max_varchar_len,
                });
            }
        }
        if let Some(b) = params[schema::VARBINARY_COLUMN].as_bytes() {
            if b.len() > self.config.max_varbinary_len {
                return Err(ExecutorError::ValueTooLong {
                    column: schema::COLUMNS[schema::VARBINARY_COLUMN].0,
                    len: b.len(),
                    max: self.config.max_varbinary_len,
                });
            }
        }
        Ok(())
    }
}

impl StatementExecutor for MemoryExecutor {
    fn execute(&mut self, statement: &StatementTemplate, params: Vec<Value>) -> Result<(), ExecutorError> {
        statement.validate()?;
        if *statement != INSERT_TYPETEST {
            return Err(ExecutorError::UnknownStatement(statement.name.to_string()));
        }
        if params.len() != statement.param_count {
            return Err(ExecutorError::ParameterCount {
                expected: statement.param_count,
                actual: params.len(),
            });
        }

        // Everything is checked before the row is stored, so a failure leaves no trace
        Self::check_types(&params)?;
        self.check_lengths(&params)?;

        let id = params[schema::PARTITION_COLUMN]
            .as_i32()
            .ok_or_else(|| ExecutorError::Failure("partition key is not an integer".to_string()))?;
        if self.rows.contains_key(&id) {
            return Err(ExecutorError::ConstraintViolation(format!(
                "duplicate primary key {}.{}={id}",
                schema::TABLE_NAME,
                schema::COLUMNS[schema::PARTITION_COLUMN].0
            )));
        }

        tracing::trace!(sql = %statement.render(&params), "row stored");
        self.rows.insert(id, params);
        Ok(())
    }
}
