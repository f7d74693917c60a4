//! Insert procedures for the typetest table
//!
//! - insert: explicit values -> bound INSERT (the shared binding contract)
//! - table_insert: first row of a GenericTable -> same contract
//! - fixture: canonical known-good row

pub mod insert;
pub mod table_insert;
pub mod fixture;

pub use insert::{RowBinder, SUCCESS};
pub use table_insert::TableAdapter;
pub use fixture::{FixtureProcedure, canonical_fixture};
