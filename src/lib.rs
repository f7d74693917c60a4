// typetest - typed value binding for the fixed-schema typetest table
// One positional INSERT per call, from explicit values or a generic table

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// Column types, values, schema, rows and the generic table
pub mod core;

// Statement templates and the executor seam (trait + in-memory implementation)
pub mod executor;

// Insert procedures: row binder, table adapter, fixture
pub mod procedure;

// Layered configuration (file + environment)
pub mod config;

// Re-export commonly used types for convenience
pub use crate::core::{BindError, Column, ColumnType, ExecutorError, GenericTable, Row, TableError, Value};
pub use crate::executor::{INSERT_TYPETEST, MemoryExecutor, StatementExecutor, StatementTemplate};
pub use crate::procedure::{FixtureProcedure, RowBinder, SUCCESS, TableAdapter, canonical_fixture};
pub use crate::config::{AppConfig, ExecutorConfig};
