//! Amount/unit conversion at NAV
//!
//! The single place where currency amounts and fund units are converted.
//! Every screen-level calculation goes through these two functions so the
//! rounding rules stay consistent app-wide.

use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::{round_currency, round_units};

/// Converts a currency amount into fund units at the given NAV
///
/// `units = amount / nav`, rounded half-up to 3 decimal places.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a non-positive NAV or a
/// negative amount. Those never come from user input; they indicate a
/// broken fund snapshot upstream.
pub fn amount_to_units(amount: Decimal, nav: Decimal) -> Result<Decimal, EngineError> {
    check_nav(nav)?;
    if amount.is_sign_negative() {
        return Err(EngineError::invalid_input(format!(
            "negative amount {amount} in unit conversion"
        )));
    }
    Ok(round_units(amount / nav))
}

/// Converts fund units into a currency amount at the given NAV
///
/// `amount = units * nav`, rounded half-up to 2 decimal places. Inverse of
/// [`amount_to_units`] up to one rounding unit.
pub fn units_to_amount(units: Decimal, nav: Decimal) -> Result<Decimal, EngineError> {
    check_nav(nav)?;
    if units.is_sign_negative() {
        return Err(EngineError::invalid_input(format!(
            "negative unit count {units} in unit conversion"
        )));
    }
    Ok(round_currency(units * nav))
}

fn check_nav(nav: Decimal) -> Result<(), EngineError> {
    if nav <= Decimal::ZERO {
        return Err(EngineError::invalid_input(format!(
            "NAV must be positive, got {nav}"
        )));
    }
    Ok(())
}
