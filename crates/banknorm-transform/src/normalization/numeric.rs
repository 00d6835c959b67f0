//! Decimal amount parsing.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept on canonical amounts.
pub const AMOUNT_SCALE: u32 = 2;

/// Parses normalized amount text (`-1234.56`) as a signed decimal.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value).ok()
}

/// Converts a numeric spreadsheet cell; `None` for NaN, infinities and
/// values outside the decimal range.
pub fn number_to_amount(value: f64) -> Option<Decimal> {
    Decimal::try_from(value).ok()
}

/// Rounds to two decimal places, midpoints away from zero.
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
