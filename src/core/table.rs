use serde::{Deserialize, Serialize};
use super::column::Column;
use super::data_type::ColumnType;
use super::error::TableError;
use super::schema;
use super::value::Value;

/// Row/column addressable table with a single row cursor
///
/// Column metadata is descriptive only: rows are checked for arity, not for
/// cell types. Readers assert the type they expect on every cell via [`GenericTable::get`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "TableData", into = "TableData")]
pub struct GenericTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
    /// `None` until the cursor is advanced onto the first row
    cursor: Option<usize>,
}

/// Serialized form, the cursor is not persisted
#[derive(Serialize, Deserialize)]
struct TableData {
    columns: Vec<Column>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl TryFrom<TableData> for GenericTable {
    type Error = TableError;

    fn try_from(data: TableData) -> Result<Self, Self::Error> {
        let mut table = Self::new(data.columns);
        for row in data.rows {
            table.add_row(row)?;
        }
        Ok(table)
    }
}

impl From<GenericTable> for TableData {
    fn from(table: GenericTable) -> Self {
        Self {
            columns: table.columns,
            rows: table.rows,
        }
    }
}

impl GenericTable {
    #[must_use]
    pub const fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            cursor: None,
        }
    }

    /// Empty table laid out like `typetest`
    #[must_use]
    pub fn typetest() -> Self {
        Self::new(
            schema::COLUMNS
                .iter()
                .map(|(name, column_type)| Column::new(*name, *column_type))
                .collect(),
        )
    }

    /// Add a column by type name. Names are stored upper-cased.
    pub fn add_column(&mut self, name: &str, type_name: &str) -> Result<(), TableError> {
        if !self.rows.is_empty() {
            return Err(TableError::SchemaLocked);
        }
        let column_type = ColumnType::from_name(type_name)?;
        self.columns.push(Column::new(name.to_uppercase(), column_type));
        Ok(())
    }

    pub fn add_row(&mut self, values: Vec<Value>) -> Result<(), TableError> {
        if values.len() != self.columns.len() {
            return Err(TableError::RowArity {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Move the cursor before the first row
    pub fn reset_row_position(&mut self) {
        self.cursor = None;
    }

    /// Step the cursor forward; returns true if it now sits on a row
    pub fn advance_row(&mut self) -> bool {
        let next = self.cursor.map_or(0, |i| i.saturating_add(1).min(self.rows.len()));
        self.cursor = Some(next);
        next < self.rows.len()
    }

    #[must_use]
    pub fn active_row_index(&self) -> Option<usize> {
        self.cursor.filter(|&i| i < self.rows.len())
    }

    /// Read a cell of the current row, asserting its type
    pub fn get(&self, index: usize, expected: ColumnType) -> Result<&Value, TableError> {
        let row = self
            .active_row_index()
            .map(|i| &self.rows[i])
            .ok_or(TableError::NoCurrentRow)?;
        let value = row.get(index).ok_or(TableError::ColumnOutOfRange {
            index,
            count: row.len(),
        })?;
        let actual = value.column_type();
        if actual != expected {
            return Err(TableError::TypeMismatch { index, expected, actual });
        }
        Ok(value)
    }
}
