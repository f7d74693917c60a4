use super::error::BindError;
use super::schema::{self, COLUMN_COUNT};
use super::value::Value;

/// One full `typetest` row, values in schema order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Wraps `values`, rejecting anything that is not exactly one value per column
    pub fn new(values: Vec<Value>) -> Result<Self, BindError> {
        if values.len() != COLUMN_COUNT {
            return Err(BindError::ColumnCountMismatch {
                expected: COLUMN_COUNT,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Infallible form for callers that already hold one value per column
    #[must_use]
    pub fn from_array(values: [Value; COLUMN_COUNT]) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Checks every value's tag against the column it sits in
    pub fn validate(&self) -> Result<(), BindError> {
        for (index, value) in self.values.iter().enumerate() {
            let expected = schema::COLUMNS[index].1;
            let actual = value.column_type();
            if actual != expected {
                return Err(BindError::SchemaMismatch { index, expected, actual });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
