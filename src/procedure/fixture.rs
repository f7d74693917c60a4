use std::sync::atomic::{AtomicI64, Ordering};
use bigdecimal::{BigDecimal, FromPrimitive};
use chrono::Utc;
use crate::core::{BindError, Row, Value, decimal};
use crate::executor::StatementExecutor;
use super::insert::RowBinder;

/// Highest timestamp handed out so far in this process
static LAST_TIMESTAMP_MS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Wall-clock milliseconds since the epoch, never lower than a previous call
#[must_use]
pub fn current_timestamp_ms() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_TIMESTAMP_MS.fetch_max(now, Ordering::SeqCst);
    previous.max(now)
}

/// Source of the fixture decimal. The binary expansion of this double has
/// more significant digits than the decimal context keeps.
pub const FIXTURE_DOUBLE: f64 = 6.000_000_1;

/// [`FIXTURE_DOUBLE`] expanded exactly, then reduced to the decimal context
#[must_use]
pub fn fixture_decimal() -> BigDecimal {
    let exact = BigDecimal::from_f64(FIXTURE_DOUBLE)
        .unwrap_or_else(|| BigDecimal::new(60_000_001.into(), 7));
    decimal::round_to_context(&exact)
}

/// The canonical known-good row, every column type populated.
///
/// The timestamp is taken at call time.
#[must_use]
pub fn canonical_fixture() -> Row {
    Row::from_array([
        Value::Int32(0),
        Value::Int8(1),
        Value::Int16(2),
        Value::Int32(3),
        Value::Int64(4),
        Value::Float64(5.1),
        Value::Decimal(fixture_decimal()),
        Value::Text("seven".to_string()),
        Value::Bytes(vec![8, 8, 8, 8]),
        Value::Timestamp(current_timestamp_ms()),
    ])
}

/// Seeds the table with the canonical fixture
pub struct FixtureProcedure<'a, E: StatementExecutor + ?Sized> {
    binder: RowBinder<'a, E>,
}

impl<'a, E: StatementExecutor + ?Sized> FixtureProcedure<'a, E> {
    pub const fn new(executor: &'a mut E) -> Self {
        Self {
            binder: RowBinder::new(executor),
        }
    }

    /// The argument is accepted for call compatibility and ignored
    pub fn run(&mut self, _unused: i32) -> Result<i64, BindError> {
        self.binder.insert_row(canonical_fixture())
    }
}
