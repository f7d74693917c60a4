use thiserror::Error;
use super::data_type::ColumnType;

/// Errors raised while building or reading a [`GenericTable`](super::GenericTable)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("'{0}' is not a valid column type")]
    UnknownType(String),
    #[error("Row has {actual} values but the table has {expected} columns")]
    RowArity { expected: usize, actual: usize },
    #[error("Columns cannot be added to a table that already holds rows")]
    SchemaLocked,
    #[error("Cursor is not positioned on a row")]
    NoCurrentRow,
    #[error("Column {index} out of range ({count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },
    #[error("Column {index}: expected {expected}, found {actual}")]
    TypeMismatch {
        index: usize,
        expected: ColumnType,
        actual: ColumnType,
    },
}

/// Failures reported by a statement executor.
///
/// The binder never inspects these, it hands them back to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("Statement '{name}' has {placeholders} placeholders but declares {param_count} parameters")]
    MalformedStatement {
        name: String,
        placeholders: usize,
        param_count: usize,
    },
    #[error("Unknown statement '{0}'")]
    UnknownStatement(String),
    #[error("Statement expects {expected} parameters, got {actual}")]
    ParameterCount { expected: usize, actual: usize },
    #[error("Parameter {index}: expected {expected}, found {actual}")]
    ParameterType {
        index: usize,
        expected: ColumnType,
        actual: ColumnType,
    },
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Value too long for column '{column}': {len} exceeds {max}")]
    ValueTooLong {
        column: &'static str,
        len: usize,
        max: usize,
    },
    #[error("Execution failed: {0}")]
    Failure(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Column count mismatch: expected {expected}, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },
    #[error("Schema mismatch at column {index}: expected {expected}, found {actual}")]
    SchemaMismatch {
        index: usize,
        expected: ColumnType,
        actual: ColumnType,
    },
    #[error("Column {0} type mismatch: expected {1}, found {2}")]
    ColumnTypeMismatch(usize, ColumnType, ColumnType),
    #[error("Table has no rows")]
    EmptyTable,
    #[error("Table error: {0}")]
    Table(TableError),
    #[error("Executor failure: {0}")]
    ExecutorFailure(#[from] ExecutorError),
}

impl From<TableError> for BindError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::TypeMismatch { index, expected, actual } => {
                Self::ColumnTypeMismatch(index, expected, actual)
            }
            TableError::NoCurrentRow => Self::EmptyTable,
            other => Self::Table(other),
        }
    }
}
