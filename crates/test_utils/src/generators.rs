//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for valid NAVs: 1.00 to 10,000.00, two decimal places
pub fn nav_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for non-negative amounts up to one crore, two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for unit counts, three decimal places
pub fn units_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

/// Strategy for step-up percentages inside the business band
pub fn step_up_percent_strategy() -> impl Strategy<Value = Decimal> {
    (1u32..=25u32).prop_map(Decimal::from)
}
