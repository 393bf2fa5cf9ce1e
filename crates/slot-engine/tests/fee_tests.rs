//! Tests for fee quoting.

use slot_engine::{quote, FeeQuote};

#[test]
fn total_is_base_times_units() {
    assert_eq!(
        quote(45_00, 3),
        FeeQuote {
            base_fee_minor: 45_00,
            unit_count: 3,
            total_minor: 135_00,
        }
    );
}

#[test]
fn zero_units_quote_to_zero() {
    assert_eq!(quote(45_00, 0).total_minor, 0);
}

#[test]
fn oversized_totals_saturate() {
    assert_eq!(quote(u64::MAX, 2).total_minor, u64::MAX);
}
