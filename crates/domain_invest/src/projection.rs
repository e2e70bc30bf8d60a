//! SIP step-up projection and growth estimates
//!
//! Two very different kinds of math live here, and they must not be
//! confused:
//!
//! - [`project_installment`] is settlement-adjacent: it produces the
//!   actual installment amount a stepped-up SIP debits in a given year.
//! - [`estimate_future_value`] and [`estimate_sip_future_value`] are
//!   **illustrative estimates only**, used for "expected value" previews
//!   on invest screens. They are simplified, non-actuarial, assume a constant
//!   return, and must never feed payout or holding-delta calculations.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::round_currency;

/// Projects the installment amount of a stepped-up SIP
///
/// `amount_at_year_n = round(base * (1 + step_up/100)^n)`, rounded half-up
/// to the whole currency unit. Year 0 returns the base amount unchanged.
pub fn project_installment(
    base_amount: Decimal,
    step_up_percent: Decimal,
    years_elapsed: u32,
) -> Decimal {
    if years_elapsed == 0 {
        return base_amount;
    }
    let factor = (Decimal::ONE + step_up_percent / dec!(100)).powi(i64::from(years_elapsed));
    (base_amount * factor).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Estimates the future value of a lump sum, compounded annually
///
/// `value = principal * (1 + rate/100)^years`, rounded to currency
/// precision. An illustration, not a guarantee.
pub fn estimate_future_value(
    principal: Decimal,
    annual_rate_percent: Decimal,
    years: u32,
) -> Decimal {
    let factor = (Decimal::ONE + annual_rate_percent / dec!(100)).powi(i64::from(years));
    round_currency(principal * factor)
}

/// Estimates the future value of a monthly SIP
///
/// Future-value-of-annuity-due approximation with a constant monthly rate
/// `i = rate/12`: `value = amount * ((1+i)^n - 1) / i * (1+i)`. Purely an
/// illustration for preview screens; never used for settlement.
pub fn estimate_sip_future_value(
    monthly_amount: Decimal,
    months: u32,
    assumed_annual_return_percent: Decimal,
) -> Decimal {
    let monthly_rate = assumed_annual_return_percent / dec!(1200);
    if monthly_rate.is_zero() {
        return round_currency(monthly_amount * Decimal::from(months));
    }
    let growth = (Decimal::ONE + monthly_rate).powi(i64::from(months));
    let value =
        monthly_amount * (growth - Decimal::ONE) / monthly_rate * (Decimal::ONE + monthly_rate);
    round_currency(value)
}
