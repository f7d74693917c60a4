use std::num::NonZeroU64;
use bigdecimal::{BigDecimal, RoundingMode};

/// Significant digits kept by the decimal context
pub const DECIMAL_PRECISION: NonZeroU64 = NonZeroU64::new(32).unwrap();

/// Reduce `value` to the decimal context (32 significant digits, half-even).
///
/// Values that already fit are returned unchanged, scale included.
#[must_use]
pub fn round_to_context(value: &BigDecimal) -> BigDecimal {
    if value.digits() <= DECIMAL_PRECISION.get() {
        return value.clone();
    }
    value.with_precision_round(DECIMAL_PRECISION, RoundingMode::HalfEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_short_value_untouched() {
        let d = BigDecimal::from_str("6.0000001").unwrap();
        let rounded = round_to_context(&d);
        assert_eq!(rounded, d);
        assert_eq!(rounded.to_string(), "6.0000001");
    }

    #[test]
    fn test_long_value_rounded_down() {
        // 40 significant digits, the 33rd is a 3
        let d = BigDecimal::from_str("1.234567890123456789012345678901234567890").unwrap();
        let rounded = round_to_context(&d);
        assert_eq!(
            rounded,
            BigDecimal::from_str("1.2345678901234567890123456789012").unwrap()
        );
        assert!(rounded.digits() <= 32);
    }

    #[test]
    fn test_long_value_rounded_up() {
        let d = BigDecimal::from_str("2.00000000000000000000000000000007").unwrap();
        let rounded = round_to_context(&d);
        assert_eq!(
            rounded,
            BigDecimal::from_str("2.0000000000000000000000000000001").unwrap()
        );
    }

    #[test]
    fn test_half_even_tie() {
        // 33 digits ending in 5: ties go to the even neighbour
        let down = BigDecimal::from_str("1.00000000000000000000000000000025").unwrap();
        assert_eq!(
            round_to_context(&down),
            BigDecimal::from_str("1.0000000000000000000000000000002").unwrap()
        );
        let up = BigDecimal::from_str("1.00000000000000000000000000000035").unwrap();
        assert_eq!(
            round_to_context(&up),
            BigDecimal::from_str("1.0000000000000000000000000000004").unwrap()
        );
    }
}
