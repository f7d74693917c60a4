use crate::core::{BindError, GenericTable, Row, schema};
use crate::executor::StatementExecutor;
use super::insert::RowBinder;

/// Inserts the first row of a [`GenericTable`] through a [`RowBinder`].
///
/// Only row 0 is read. Every cell is read with the schema's type for its
/// column; nothing is coerced.
pub struct TableAdapter<'a, E: StatementExecutor + ?Sized> {
    binder: RowBinder<'a, E>,
}

impl<'a, E: StatementExecutor + ?Sized> TableAdapter<'a, E> {
    pub const fn new(executor: &'a mut E) -> Self {
        Self {
            binder: RowBinder::new(executor),
        }
    }

    pub fn bind_and_insert_from_table(&mut self, table: &mut GenericTable) -> Result<i64, BindError> {
        if table.is_empty() {
            return Err(BindError::EmptyTable);
        }

        table.reset_row_position();
        table.advance_row();

        let values = schema::COLUMNS
            .iter()
            .enumerate()
            .map(|(index, (_, expected))| table.get(index, *expected).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = table.row_count(), "binding first table row");
        self.binder.insert_row(Row::new(values)?)
    }
}
