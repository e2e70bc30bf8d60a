//! Business-rule validation
//!
//! Every rule returns a typed [`RejectReason`] instead of throwing, so
//! callers pattern-match and render guidance. Rules are evaluated in a
//! fixed order and the first failure wins; the orchestrator relies on
//! that ordering.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::RejectReason;
use crate::fund::{Fund, InvestmentMode};
use crate::holding::Holding;
use crate::{STEP_UP_MAX_PERCENT, STEP_UP_MIN_PERCENT};

/// Parses a raw amount string from an input field
///
/// Accepts grouped digits ("25,000") and surrounding whitespace. Anything
/// non-numeric or negative is [`RejectReason::InvalidAmount`].
pub fn parse_amount(raw: &str) -> Result<Decimal, RejectReason> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let amount: Decimal = cleaned.parse().map_err(|_| RejectReason::InvalidAmount)?;
    if amount.is_sign_negative() {
        return Err(RejectReason::InvalidAmount);
    }
    Ok(amount)
}

/// Converts a raw float from an input widget into a decimal amount
///
/// NaN, infinities, and negative values are [`RejectReason::InvalidAmount`].
pub fn amount_from_f64(value: f64) -> Result<Decimal, RejectReason> {
    if !value.is_finite() || value < 0.0 {
        return Err(RejectReason::InvalidAmount);
    }
    Decimal::from_f64(value).ok_or(RejectReason::InvalidAmount)
}

/// Validates a purchase (lump-sum or SIP installment) against the fund
///
/// Rule order: non-negative amount, then the fund minimum for the mode.
pub fn validate_purchase(
    fund: &Fund,
    mode: InvestmentMode,
    amount: Decimal,
) -> Result<(), RejectReason> {
    if amount.is_sign_negative() {
        return Err(RejectReason::InvalidAmount);
    }
    let minimum = fund.minimum_for(mode);
    if amount < minimum {
        return Err(RejectReason::BelowMinimum { minimum, amount });
    }
    Ok(())
}

/// Validates a step-up percentage against the business band
pub fn validate_step_up(percent: Decimal) -> Result<(), RejectReason> {
    if percent < Decimal::from(STEP_UP_MIN_PERCENT) || percent > Decimal::from(STEP_UP_MAX_PERCENT)
    {
        return Err(RejectReason::StepUpOutOfRange(percent));
    }
    Ok(())
}

/// Validates a SIP debit day
pub fn validate_day_of_month(day: u8) -> Result<(), RejectReason> {
    if !(1..=28).contains(&day) {
        return Err(RejectReason::InvalidDayOfMonth(day));
    }
    Ok(())
}

/// Validates a by-units redemption against the holding
pub fn validate_redemption_units(
    holding: &Holding,
    requested: Decimal,
) -> Result<(), RejectReason> {
    if requested.is_sign_negative() {
        return Err(RejectReason::InvalidAmount);
    }
    if requested > holding.units {
        return Err(RejectReason::InsufficientUnits {
            requested,
            held: holding.units,
        });
    }
    Ok(())
}

/// Validates a by-amount redemption against the holding's current value
pub fn validate_redemption_value(
    holding: &Holding,
    nav: Decimal,
    requested: Decimal,
) -> Result<(), RejectReason> {
    if requested.is_sign_negative() {
        return Err(RejectReason::InvalidAmount);
    }
    let available = holding.value_at_nav(nav);
    if requested > available {
        return Err(RejectReason::InsufficientValue {
            requested,
            available,
        });
    }
    Ok(())
}
