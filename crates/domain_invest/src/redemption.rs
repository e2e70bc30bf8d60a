//! Redemption resolution
//!
//! Turns a redemption request (by amount, by units, or "redeem all") into
//! a concrete unit count, gross amount, and estimated deductions. A
//! request that exceeds what the holding can cover is rejected outright,
//! never silently clamped, so the user learns about their mistake.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::error::EngineError;
use crate::fund::Fund;
use crate::holding::Holding;
use crate::orchestrator::{TransactionReceipt, TransactionResult};
use crate::units::{amount_to_units, units_to_amount};
use crate::validation::{validate_redemption_units, validate_redemption_value};

/// How the redemption quantity is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionMode {
    /// Redeem everything in the holding
    All,
    /// Redeem a currency amount
    ByAmount,
    /// Redeem a unit count
    ByUnits,
}

/// A redemption request against a holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRequest {
    pub mode: RedemptionMode,
    /// Requested amount or units; ignored for `All`
    pub value: Decimal,
}

impl RedemptionRequest {
    /// Redeem the full holding
    pub fn all() -> Self {
        Self {
            mode: RedemptionMode::All,
            value: Decimal::ZERO,
        }
    }

    /// Redeem a currency amount
    pub fn by_amount(amount: Decimal) -> Self {
        Self {
            mode: RedemptionMode::ByAmount,
            value: amount,
        }
    }

    /// Redeem a unit count
    pub fn by_units(units: Decimal) -> Self {
        Self {
            mode: RedemptionMode::ByUnits,
            value: units,
        }
    }
}

/// Caller-supplied deduction rates for a redemption
///
/// The engine does not encode tax law; the tax rate is a flat-rate
/// placeholder chosen by the caller. The exit load comes from the fund
/// snapshot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionCharges {
    /// Flat tax rate applied to the gross redemption amount
    pub tax_rate: Rate,
}

impl RedemptionCharges {
    pub fn new(tax_rate: Rate) -> Self {
        Self { tax_rate }
    }

    /// No deductions
    pub fn none() -> Self {
        Self {
            tax_rate: Rate::zero(),
        }
    }
}

/// Resolves a redemption request into a concrete result
///
/// Modes:
/// - `All`: units = everything held, amount = units × NAV
/// - `ByAmount`: units = amount / NAV, after checking the requested amount
///   against the current holding value
/// - `ByUnits`: amount = units × NAV, after checking the requested units
///   against the units held
///
/// Deductions: `tax = amount × tax_rate`, and an exit load when the fund
/// has one, the purchase date is known, and the holding period has not
/// been met by `as_of`. `payout = amount − tax − exit_load`.
///
/// # Errors
///
/// `EngineError` only for defect-class input (bad NAV); user shortfalls
/// come back as `TransactionResult::Rejected`.
pub fn resolve(
    request: &RedemptionRequest,
    holding: &Holding,
    fund: &Fund,
    charges: &RedemptionCharges,
    as_of: NaiveDate,
) -> Result<TransactionResult, EngineError> {
    fund.validate_snapshot()?;
    let nav = fund.nav;

    let (units, gross) = match request.mode {
        RedemptionMode::All => {
            let units = holding.units;
            (units, units_to_amount(units, nav)?)
        }
        RedemptionMode::ByAmount => {
            if let Err(reason) = validate_redemption_value(holding, nav, request.value) {
                return Ok(TransactionResult::Rejected { reason });
            }
            let units = amount_to_units(request.value, nav)?;
            // Conversion rounding can nudge units past the holding; cap at
            // what is actually held.
            let units = units.min(holding.units);
            (units, request.value)
        }
        RedemptionMode::ByUnits => {
            if let Err(reason) = validate_redemption_units(holding, request.value) {
                return Ok(TransactionResult::Rejected { reason });
            }
            (request.value, units_to_amount(request.value, nav)?)
        }
    };

    let gross = Money::new(gross, fund.currency).round_to_currency();
    let tax = charges.tax_rate.apply(&gross).round_to_currency();
    let exit_load = exit_load_deduction(holding, fund, &gross, as_of);
    let payout = (gross - tax - exit_load).round_to_currency();

    Ok(TransactionResult::Success(TransactionReceipt {
        fund_id: fund.id,
        units,
        amount: gross,
        effective_nav: nav,
        estimated_tax: tax,
        exit_load,
        estimated_payout: payout,
        projected_value: None,
    }))
}

/// Exit-load deduction for the redemption, zero when the load does not
/// apply or the purchase date is unknown (display-only fallback).
fn exit_load_deduction(holding: &Holding, fund: &Fund, gross: &Money, as_of: NaiveDate) -> Money {
    match (fund.exit_load, holding.purchased_on) {
        (Some(load), Some(purchased_on)) if load.applies(purchased_on, as_of) => {
            Rate::from_percentage(load.percent)
                .apply(gross)
                .round_to_currency()
        }
        _ => Money::zero(fund.currency),
    }
}
