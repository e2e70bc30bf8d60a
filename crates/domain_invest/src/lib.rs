//! Investment Transaction Engine
//!
//! This crate implements the transaction engine of the mutual-fund app:
//! amount/unit conversion at NAV, purchase and redemption validation,
//! SIP step-up projection, illustrative growth estimates, and the
//! orchestrator that turns a transaction intent into one immutable result.
//!
//! # Key Concepts
//!
//! - **Fund**: an immutable snapshot of a scheme (NAV, minimums, exit load)
//! - **NAV**: Net Asset Value per unit as of a valuation date
//! - **Holding**: an investor's units in a specific fund
//! - **SIP**: a recurring fixed-amount purchase plan, optionally stepped up annually
//!
//! # Precision
//!
//! Units are carried to 3 decimal places and currency to 2, both rounded
//! half-up, matching how the app renders statements:
//! - Amount: ₹25,000
//! - NAV: ₹52.32
//! - Units: 477.829
//!
//! # Purity
//!
//! Every operation in this crate is a synchronous pure function over its
//! explicit arguments. Nothing here performs I/O, reads a clock inside a
//! calculation, or retains state between calls.

pub mod error;
pub mod fund;
pub mod holding;
pub mod orchestrator;
pub mod ports;
pub mod projection;
pub mod redemption;
pub mod sip;
pub mod units;
pub mod validation;

pub use error::{EngineError, RejectReason};
pub use fund::{ExitLoad, Fund, FundCategory, InvestmentMode, RiskLevel};
pub use holding::Holding;
pub use orchestrator::{
    GrowthAssumption, TransactionIntent, TransactionOrchestrator, TransactionReceipt,
    TransactionResult,
};
pub use ports::{DeltaKind, FundCatalog, HoldingDelta, PortfolioStore};
pub use projection::{estimate_future_value, estimate_sip_future_value, project_installment};
pub use redemption::{RedemptionCharges, RedemptionMode, RedemptionRequest};
pub use sip::{SipDuration, SipFrequency, SipPlan, SipStatus, StepUp};
pub use units::{amount_to_units, units_to_amount};

use rust_decimal::{Decimal, RoundingStrategy};

/// Standard unit precision (3 decimal places)
pub const UNIT_PRECISION: u32 = 3;

/// Standard currency precision (2 decimal places)
pub const CURRENCY_PRECISION: u32 = 2;

/// Step-up percentage lower bound
pub const STEP_UP_MIN_PERCENT: u32 = 1;

/// Step-up percentage upper bound
pub const STEP_UP_MAX_PERCENT: u32 = 25;

/// Rounds a unit count to standard precision, half-up
pub fn round_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(UNIT_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a currency amount to standard precision, half-up
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_units_half_up() {
        assert_eq!(round_units(dec!(477.8285)), dec!(477.829));
        assert_eq!(round_units(dec!(477.8284)), dec!(477.828));
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec!(10.005)), dec!(10.01));
        assert_eq!(round_currency(dec!(10.0049)), dec!(10.00));
    }
}
