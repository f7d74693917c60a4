//! Statement execution seam
//!
//! The binder never touches storage itself. It hands a statement template and
//! an ordered parameter list to a [`StatementExecutor`], which owns atomicity,
//! durability and partition routing.

pub mod statement;
pub mod memory;

pub use statement::{INSERT_TYPETEST, StatementTemplate, substitute_parameters};
pub use memory::MemoryExecutor;

use crate::core::{ExecutorError, Value};

/// Runs one parameterized statement as a single unit of work
pub trait StatementExecutor {
    /// Execute `statement` with positional `params`.
    ///
    /// Blocking. Either the whole statement takes effect or none of it does.
    fn execute(&mut self, statement: &StatementTemplate, params: Vec<Value>) -> Result<(), ExecutorError>;
}

impl<E: StatementExecutor + ?Sized> StatementExecutor for &mut E {
    fn execute(&mut self, statement: &StatementTemplate, params: Vec<Value>) -> Result<(), ExecutorError> {
        (**self).execute(statement, params)
    }
}

impl<E: StatementExecutor + ?Sized> StatementExecutor for Box<E> {
    fn execute(&mut self, statement: &StatementTemplate, params: Vec<Value>) -> Result<(), ExecutorError> {
        (**self).execute(statement, params)
    }
}
